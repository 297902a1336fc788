//! Photo API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Photo, PhotoCreate, PhotoUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::photo;
use crate::utils::validation::{MAX_URL_LEN, validate_payload, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/photos - 本店照片
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Photo>>> {
    let owner_id = current.company_id()?;
    Ok(Json(photo::find_by_owner(state.pool(), owner_id).await?))
}

/// POST /api/photos - 上传照片 (仅记录外部存储地址)
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<PhotoCreate>,
) -> AppResult<Json<Photo>> {
    let owner_id = current.company_id()?;
    validate_payload(&payload)?;
    validate_required_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let created = photo::create(state.pool(), owner_id, &payload, shared::util::now_millis()).await?;
    Ok(Json(created))
}

/// PUT /api/photos/{id} - 修改照片
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PhotoUpdate>,
) -> AppResult<Json<Photo>> {
    let owner_id = current.company_id()?;
    validate_payload(&payload)?;

    let updated = photo::update(state.pool(), owner_id, id, &payload)
        .await?
        .ok_or_else(|| photo_not_found(id))?;
    Ok(Json(updated))
}

/// DELETE /api/photos/{id} - 删除照片
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let owner_id = current.company_id()?;
    if !photo::delete(state.pool(), owner_id, id).await? {
        return Err(photo_not_found(id));
    }
    Ok(Json(true))
}

fn photo_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::PhotoNotFound).with_detail("photo_id", id)
}
