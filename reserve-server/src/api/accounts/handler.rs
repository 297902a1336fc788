//! Account API Handlers

use axum::{Json, extract::State};
use shared::models::{Company, CompanyRegister, CustomerRegister, User, UserUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::services::accounts;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

/// POST /api/accounts/customers - 注册顾客
pub async fn register_customer(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerRegister>,
) -> AppResult<Json<User>> {
    let created = accounts::register_customer(state.pool(), &payload).await?;
    Ok(Json(created))
}

/// POST /api/accounts/companies - 注册餐厅
pub async fn register_company(
    State(state): State<ServerState>,
    Json(payload): Json<CompanyRegister>,
) -> AppResult<Json<Company>> {
    let created = accounts::register_company(state.pool(), &payload).await?;
    Ok(Json(created))
}

/// GET /api/accounts/me - 当前用户
pub async fn me(State(state): State<ServerState>, current: CurrentUser) -> AppResult<Json<User>> {
    let account = user::find_by_id(state.pool(), current.id)
        .await?
        .ok_or_else(AppError::not_authenticated)?;
    Ok(Json(account))
}

/// PUT /api/accounts/me - 修改姓名
pub async fn update_me(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    validate_payload(&payload)?;
    let account = user::update(state.pool(), current.id, &payload)
        .await?
        .ok_or_else(AppError::not_authenticated)?;
    Ok(Json(account))
}
