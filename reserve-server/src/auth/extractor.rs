//! CurrentUser Extractor
//!
//! Resolves the forwarded account id into a [`CurrentUser`]

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, USER_ID_HEADER};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok());

        let id = match raw.map(|v| v.trim().parse::<i64>()) {
            Some(Ok(id)) => id,
            Some(Err(_)) => {
                security_log!("WARN", "auth_malformed", uri = format!("{:?}", parts.uri));
                return Err(AppError::not_authenticated());
            }
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::not_authenticated());
            }
        };

        let account = user::find_by_id(state.pool(), id).await?.ok_or_else(|| {
            security_log!("WARN", "auth_unknown_user", user_id = id);
            AppError::not_authenticated()
        })?;

        if !account.is_active {
            security_log!("WARN", "auth_disabled", user_id = id);
            return Err(AppError::new(ErrorCode::AccountDisabled));
        }

        let current = CurrentUser::from(account);
        parts.extensions.insert(current.clone());
        Ok(current)
    }
}
