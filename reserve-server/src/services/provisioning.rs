//! 桌台批量开通
//!
//! Creates `amount` identical tables for a company. The availability grid is
//! generated once from the company's work hours and copied onto every table,
//! so each table ends up with its own slot and date rows.
//!
//! The whole batch runs in one transaction: either every table (with all of
//! its rows) is created, or none is.

use chrono::NaiveDate;
use shared::models::{Company, DiningTable, TableProvision};
use sqlx::SqlitePool;

use crate::availability::AvailabilityGrid;
use crate::db::repository::{RepoError, dining_table};
use crate::utils::validation::validate_payload;
use crate::utils::AppResult;

/// Provision `request.amount` tables of `request.size` seats at `request.table_place`
pub async fn provision_tables(
    pool: &SqlitePool,
    company: &Company,
    request: &TableProvision,
    today: NaiveDate,
) -> AppResult<Vec<DiningTable>> {
    validate_payload(request)?;

    let grid = AvailabilityGrid::for_hours(company.work_hours_from, company.work_hours_to, today);
    if grid.free_times.is_empty() {
        tracing::warn!(
            company_id = company.id,
            from = %company.work_hours_from,
            to = %company.work_hours_to,
            "Work hours yield no slots, tables will have no bookable times"
        );
    }

    let now = shared::util::now_millis();
    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    let mut tables = Vec::with_capacity(request.amount as usize);
    for _ in 0..request.amount {
        let table = dining_table::create_with_availability(
            &mut *tx,
            company.id,
            request.size,
            request.table_place,
            &grid,
            now,
        )
        .await?;
        tables.push(table);
    }

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        company_id = company.id,
        amount = tables.len(),
        size = request.size,
        place = ?request.table_place,
        rows_per_table = grid.rows_per_table(),
        "Tables provisioned"
    );
    Ok(tables)
}
