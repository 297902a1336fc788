//! Company API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Company, CompanyUpdate, Reservation, ReservationCreate, User};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::company;
use crate::services::{accounts, reservations};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/companies/{id} - 餐厅信息 (公开)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Company>> {
    let found = company::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound).with_detail("company_id", id))?;
    Ok(Json(found))
}

/// PUT /api/companies/{id} - 修改自己的餐厅信息
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CompanyUpdate>,
) -> AppResult<Json<Company>> {
    let company_id = owned_company(&current, id)?;
    let updated = accounts::update_company(state.pool(), company_id, &payload).await?;
    Ok(Json(updated))
}

/// GET /api/companies/{id}/reserved-users - 在本店有预订的用户 (去重)
pub async fn reserved_users(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<User>>> {
    let company_id = owned_company(&current, id)?;
    let users = reservations::distinct_reserving_users(state.pool(), company_id).await?;
    Ok(Json(users))
}

/// GET /api/companies/{id}/reservations - 当前用户的预订
///
/// Filters by the acting user only; `id` is accepted for route symmetry
/// with the booking endpoint.
pub async fn list_reservations(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(_id): Path<i64>,
) -> AppResult<Json<Vec<Reservation>>> {
    let list = reservations::reservations_for_user(state.pool(), current.id).await?;
    Ok(Json(list))
}

/// POST /api/companies/{id}/reservations - 预订桌台
pub async fn create_reservation(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    current.require_customer()?;
    let created = reservations::create_reservation(state.pool(), current.id, id, &payload).await?;
    Ok(Json(created))
}

/// The acting account must be the company named in the path
fn owned_company(current: &CurrentUser, id: i64) -> AppResult<i64> {
    let company_id = current.company_id()?;
    if company_id != id {
        return Err(AppError::permission_denied("Not your company"));
    }
    Ok(company_id)
}
