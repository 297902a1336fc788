//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Menu, MenuCategory, MenuCreate, MenuListing, MenuUpdate};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::menu;
use crate::utils::validation::{MAX_NAME_LEN, validate_payload, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/menu-categories - 菜单分类
pub async fn list_categories(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuCategory>>> {
    let categories = menu::find_categories(state.pool()).await?;
    Ok(Json(categories))
}

/// GET /api/menus - 本店菜单 + 全部分类
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<MenuListing>> {
    let company_id = current.company_id()?;
    let menus = menu::find_by_company(state.pool(), company_id).await?;
    let menu_categories = menu::find_categories(state.pool()).await?;
    Ok(Json(MenuListing {
        menus,
        menu_categories,
    }))
}

/// POST /api/menus - 新建菜品
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    let company_id = current.company_id()?;
    validate_payload(&payload)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    check_price(Some(payload.price))?;
    check_category(state.pool(), payload.category_id).await?;

    let created = menu::create(state.pool(), company_id, &payload, shared::util::now_millis()).await?;
    Ok(Json(created))
}

/// PUT /api/menus/{id} - 修改菜品
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<MenuUpdate>,
) -> AppResult<Json<Menu>> {
    let company_id = current.company_id()?;
    validate_payload(&payload)?;
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    check_price(payload.price)?;
    check_category(state.pool(), payload.category_id.flatten()).await?;

    let updated = menu::update(state.pool(), company_id, id, &payload)
        .await?
        .ok_or_else(|| menu_not_found(id))?;
    Ok(Json(updated))
}

/// DELETE /api/menus/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let company_id = current.company_id()?;
    if !menu::delete(state.pool(), company_id, id).await? {
        return Err(menu_not_found(id));
    }
    Ok(Json(true))
}

fn check_price(price: Option<i64>) -> AppResult<()> {
    match price {
        Some(p) if p < 0 => Err(AppError::new(ErrorCode::MenuInvalidPrice).with_detail("price", p)),
        _ => Ok(()),
    }
}

async fn check_category(pool: &SqlitePool, category_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = category_id
        && !menu::category_exists(pool, id).await?
    {
        return Err(AppError::new(ErrorCode::MenuCategoryNotFound).with_detail("category_id", id));
    }
    Ok(())
}

fn menu_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::MenuNotFound).with_detail("menu_id", id)
}
