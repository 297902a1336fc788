//! 认证授权模块
//!
//! Authentication happens upstream; the gateway forwards the authenticated
//! account id in the [`USER_ID_HEADER`] header. This module loads that
//! account and answers the role questions handlers ask.
//!
//! - [`CurrentUser`] - 当前用户上下文 (axum extractor)

pub mod extractor;

use shared::models::User;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Header carrying the authenticated account id
pub const USER_ID_HEADER: &str = "x-user-id";

/// 当前用户上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub is_customer: bool,
    pub is_company: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_customer: user.is_customer,
            is_company: user.is_company,
        }
    }
}

impl CurrentUser {
    /// Id of the company this account manages
    pub fn company_id(&self) -> AppResult<i64> {
        if !self.is_company {
            return Err(AppError::new(ErrorCode::CompanyRequired));
        }
        Ok(self.id)
    }

    pub fn require_customer(&self) -> AppResult<()> {
        if !self.is_customer {
            return Err(AppError::new(ErrorCode::CustomerRequired));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_customer: bool, is_company: bool) -> CurrentUser {
        CurrentUser {
            id: 7,
            email: "u@example.com".to_string(),
            is_customer,
            is_company,
        }
    }

    #[test]
    fn test_company_id_requires_company_account() {
        assert_eq!(user(false, true).company_id().unwrap(), 7);
        let err = user(true, false).company_id().unwrap_err();
        assert_eq!(err.code, ErrorCode::CompanyRequired);
    }

    #[test]
    fn test_require_customer() {
        assert!(user(true, false).require_customer().is_ok());
        let err = user(false, true).require_customer().unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerRequired);
    }
}
