//! Company Repository

use super::RepoResult;
use chrono::NaiveTime;
use shared::models::{Company, CompanyRegister, CompanyUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "id, name, address, phone, description, work_hours_from, work_hours_to";

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<Company>> {
    let company =
        sqlx::query_as::<_, Company>(&format!("SELECT {COLUMNS} FROM company WHERE id = ?"))
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(company)
}

/// Insert the profile row for an existing company account
pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    data: &CompanyRegister,
    work_hours_from: NaiveTime,
    work_hours_to: NaiveTime,
) -> RepoResult<Company> {
    let company = sqlx::query_as::<_, Company>(&format!(
        "INSERT INTO company (id, name, address, phone, description, work_hours_from, work_hours_to) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.description)
    .bind(work_hours_from)
    .bind(work_hours_to)
    .fetch_one(executor)
    .await?;
    Ok(company)
}

/// Partial update; `None` fields keep their stored value
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &CompanyUpdate,
) -> RepoResult<Option<Company>> {
    let company = sqlx::query_as::<_, Company>(&format!(
        "UPDATE company SET name = COALESCE(?1, name), address = COALESCE(?2, address), phone = COALESCE(?3, phone), description = COALESCE(?4, description), work_hours_from = COALESCE(?5, work_hours_from), work_hours_to = COALESCE(?6, work_hours_to) WHERE id = ?7 RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.description)
    .bind(data.work_hours_from)
    .bind(data.work_hours_to)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(company)
}
