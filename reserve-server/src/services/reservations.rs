//! 预订服务
//!
//! Reading reservations back per user / per company, and booking a slot.

use std::collections::HashSet;

use shared::ErrorCode;
use shared::models::{Reservation, ReservationCreate, User};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, company, dining_table, reservation};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

/// Every user holding a reservation at `company_id`, once each, in the order
/// their first reservation was made
pub async fn distinct_reserving_users(pool: &SqlitePool, company_id: i64) -> AppResult<Vec<User>> {
    let users = reservation::find_reserving_users(pool, company_id).await?;
    Ok(first_seen(users))
}

/// Reservations made by the acting user
pub async fn reservations_for_user(pool: &SqlitePool, user_id: i64) -> AppResult<Vec<Reservation>> {
    Ok(reservation::find_by_user(pool, user_id).await?)
}

/// Book one slot of one table at `company_id` for `user_id`.
///
/// Runs in a single transaction. The slot flag is flipped with a conditional
/// update, so of two racing bookings exactly one succeeds.
pub async fn create_reservation(
    pool: &SqlitePool,
    user_id: i64,
    company_id: i64,
    request: &ReservationCreate,
) -> AppResult<Reservation> {
    validate_payload(request)?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    if company::find_by_id(&mut *tx, company_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::CompanyNotFound).with_detail("company_id", company_id));
    }

    let table = dining_table::find_owned(&mut *tx, company_id, request.table_id)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::TableNotFound).with_detail("table_id", request.table_id)
        })?;

    if request.party_size > table.size {
        return Err(AppError::with_message(
            ErrorCode::TableCapacityExceeded,
            format!("Table seats {}, party of {}", table.size, request.party_size),
        )
        .with_detail("table_size", table.size));
    }

    if !dining_table::has_date(&mut *tx, table.id, request.date).await? {
        return Err(AppError::new(ErrorCode::DateNotAvailable)
            .with_detail("date", request.date.to_string()));
    }

    if dining_table::find_time(&mut *tx, table.id, request.time_slot_id)
        .await?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::TimeSlotNotFound)
            .with_detail("time_slot_id", request.time_slot_id));
    }

    if !dining_table::reserve_time(&mut *tx, table.id, request.time_slot_id).await? {
        return Err(AppError::new(ErrorCode::TimeSlotReserved)
            .with_detail("time_slot_id", request.time_slot_id));
    }

    let created = reservation::create(
        &mut *tx,
        user_id,
        company_id,
        table.id,
        request.time_slot_id,
        request.date,
        request.party_size,
        shared::util::now_millis(),
    )
    .await?;

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        reservation_id = created.id,
        user_id,
        company_id,
        table_id = table.id,
        date = %created.date,
        "Reservation created"
    );
    Ok(created)
}

/// Keep the first occurrence of each user id
fn first_seen(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::new();
    users.into_iter().filter(|u| seen.insert(u.id)).collect()
}
