//! Dining Table Repository
//!
//! Tables own their `time_slot` / `table_date` rows through `table_id`;
//! deleting a table cascades to both (and to reservations on it).

use super::RepoResult;
use crate::availability::AvailabilityGrid;
use chrono::NaiveDate;
use shared::models::{DiningTable, TableDate, TablePlace, TimeSlot};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor, SqlitePool};

const COLUMNS: &str = "id, company_id, size, table_place, created_at";

/// Tables of one company at one place, smallest first
pub async fn find_by_place(
    pool: &SqlitePool,
    company_id: i64,
    place: TablePlace,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE company_id = ? AND table_place = ? ORDER BY size, id"
    ))
    .bind(company_id)
    .bind(place)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn count_by_company(pool: &SqlitePool, company_id: i64) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dining_table WHERE company_id = ?")
        .bind(company_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Find a table only if it belongs to `company_id`
pub async fn find_owned<'e>(
    executor: impl SqliteExecutor<'e>,
    company_id: i64,
    id: i64,
) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE id = ? AND company_id = ?"
    ))
    .bind(id)
    .bind(company_id)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

/// Insert one table plus its own copy of every slot and date in `grid`
pub async fn create_with_availability(
    conn: &mut SqliteConnection,
    company_id: i64,
    size: i32,
    place: TablePlace,
    grid: &AvailabilityGrid,
    now: i64,
) -> RepoResult<DiningTable> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "INSERT INTO dining_table (company_id, size, table_place, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING {COLUMNS}"
    ))
    .bind(company_id)
    .bind(size)
    .bind(place)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    if !grid.free_times.is_empty() {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO time_slot (table_id, free_time, reserved) ");
        builder.push_values(&grid.free_times, |mut row, free_time| {
            row.push_bind(table.id).push_bind(*free_time).push_bind(false);
        });
        builder.build().execute(&mut *conn).await?;
    }

    if !grid.reserve_dates.is_empty() {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO table_date (table_id, date) ");
        builder.push_values(&grid.reserve_dates, |mut row, date| {
            row.push_bind(table.id).push_bind(*date);
        });
        builder.build().execute(&mut *conn).await?;
    }

    Ok(table)
}

/// Slots of a table in creation order
pub async fn find_times(pool: &SqlitePool, table_id: i64) -> RepoResult<Vec<TimeSlot>> {
    let times = sqlx::query_as::<_, TimeSlot>(
        "SELECT id, table_id, free_time, reserved FROM time_slot WHERE table_id = ? ORDER BY id",
    )
    .bind(table_id)
    .fetch_all(pool)
    .await?;
    Ok(times)
}

/// Dates of a table in creation order
pub async fn find_dates(pool: &SqlitePool, table_id: i64) -> RepoResult<Vec<TableDate>> {
    let dates = sqlx::query_as::<_, TableDate>(
        "SELECT id, table_id, date FROM table_date WHERE table_id = ? ORDER BY id",
    )
    .bind(table_id)
    .fetch_all(pool)
    .await?;
    Ok(dates)
}

pub async fn find_time<'e>(
    executor: impl SqliteExecutor<'e>,
    table_id: i64,
    time_slot_id: i64,
) -> RepoResult<Option<TimeSlot>> {
    let slot = sqlx::query_as::<_, TimeSlot>(
        "SELECT id, table_id, free_time, reserved FROM time_slot WHERE id = ? AND table_id = ?",
    )
    .bind(time_slot_id)
    .bind(table_id)
    .fetch_optional(executor)
    .await?;
    Ok(slot)
}

pub async fn has_date<'e>(
    executor: impl SqliteExecutor<'e>,
    table_id: i64,
    date: NaiveDate,
) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM table_date WHERE table_id = ? AND date = ?",
    )
    .bind(table_id)
    .bind(date)
    .fetch_one(executor)
    .await?;
    Ok(found > 0)
}

/// Flip a free slot to reserved. Returns `false` when the slot was already
/// taken (or is not on this table), so two bookings cannot both succeed.
pub async fn reserve_time<'e>(
    executor: impl SqliteExecutor<'e>,
    table_id: i64,
    time_slot_id: i64,
) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE time_slot SET reserved = 1 WHERE id = ? AND table_id = ? AND reserved = 0",
    )
    .bind(time_slot_id)
    .bind(table_id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Hard delete an owned table; slots, dates and reservations cascade
pub async fn delete(pool: &SqlitePool, company_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM dining_table WHERE id = ? AND company_id = ?")
        .bind(id)
        .bind(company_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
