//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{CompanyTables, DiningTable, TableDetail, TablePlace, TableProvision};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{company, dining_table};
use crate::services::provision_tables;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/tables - 获取本店所有桌台 (按室内/室外分组)
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<CompanyTables>> {
    let company_id = current.company_id()?;
    let inside_tables = dining_table::find_by_place(state.pool(), company_id, TablePlace::Inside).await?;
    let outside_tables =
        dining_table::find_by_place(state.pool(), company_id, TablePlace::Outside).await?;
    Ok(Json(CompanyTables {
        inside_tables,
        outside_tables,
    }))
}

/// POST /api/tables - 批量开通桌台
pub async fn provision(
    State(state): State<ServerState>,
    current: CurrentUser,
    Json(payload): Json<TableProvision>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let company_id = current.company_id()?;
    let owner = company::find_by_id(state.pool(), company_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))?;

    let tables = provision_tables(state.pool(), &owner, &payload, state.today()).await?;
    Ok(Json(tables))
}

/// GET /api/tables/{id} - 获取单个桌台 (含时段和日期)
pub async fn get_by_id(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<TableDetail>> {
    let company_id = current.company_id()?;
    let table = dining_table::find_owned(state.pool(), company_id, id)
        .await?
        .ok_or_else(|| table_not_found(id))?;

    let times = dining_table::find_times(state.pool(), table.id).await?;
    let dates = dining_table::find_dates(state.pool(), table.id).await?;
    Ok(Json(TableDetail {
        table,
        times,
        dates,
    }))
}

/// DELETE /api/tables/{id} - 删除桌台 (时段、日期、预订一并删除)
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let company_id = current.company_id()?;
    if !dining_table::delete(state.pool(), company_id, id).await? {
        return Err(table_not_found(id));
    }
    tracing::info!(company_id, table_id = id, "Table deleted");
    Ok(Json(true))
}

fn table_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::TableNotFound).with_detail("table_id", id)
}
