//! Reservation Repository

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::{Reservation, User};
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "id, user_id, company_id, table_id, time_slot_id, date, party_size, created_at";

/// Reservations made by one user, oldest first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE user_id = ? ORDER BY id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Reservations held at one company, oldest first
pub async fn find_by_company(pool: &SqlitePool, company_id: i64) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE company_id = ? ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Account of every reservation at a company, in reservation order.
/// A user appears once per reservation; callers dedupe.
pub async fn find_reserving_users(pool: &SqlitePool, company_id: i64) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT a.id, a.email, a.first_name, a.last_name, a.is_customer, a.is_company, a.is_active, a.date_joined \
         FROM reservation r JOIN account a ON a.id = r.user_id \
         WHERE r.company_id = ? ORDER BY r.id",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

#[allow(clippy::too_many_arguments)]
pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: i64,
    company_id: i64,
    table_id: i64,
    time_slot_id: i64,
    date: NaiveDate,
    party_size: i32,
    now: i64,
) -> RepoResult<Reservation> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "INSERT INTO reservation (user_id, company_id, table_id, time_slot_id, date, party_size, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {COLUMNS}"
    ))
    .bind(user_id)
    .bind(company_id)
    .bind(table_id)
    .bind(time_slot_id)
    .bind(date)
    .bind(party_size)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(reservation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AvailabilityGrid;
    use crate::db::repository::{dining_table, test_support};
    use chrono::NaiveTime;
    use shared::models::TablePlace;

    async fn seed_table(pool: &SqlitePool, company_id: i64) -> (i64, i64) {
        let grid = AvailabilityGrid::for_hours(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        let mut conn = pool.acquire().await.unwrap();
        let table = dining_table::create_with_availability(
            &mut conn,
            company_id,
            4,
            TablePlace::Inside,
            &grid,
            0,
        )
        .await
        .unwrap();
        drop(conn);
        let slot = dining_table::find_times(pool, table.id).await.unwrap()[0].id;
        (table.id, slot)
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;
        let ana = test_support::customer(&pool, "ana@example.com").await;
        let (table_id, slot_id) = seed_table(&pool, company.id).await;
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

        let created = create(&pool, ana.id, company.id, table_id, slot_id, date, 3, 50)
            .await
            .unwrap();
        assert_eq!(created.date, date);
        assert_eq!(created.party_size, 3);

        assert_eq!(find_by_user(&pool, ana.id).await.unwrap(), vec![created.clone()]);
        assert_eq!(find_by_company(&pool, company.id).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_reserving_users_repeat_per_reservation() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;
        let ana = test_support::customer(&pool, "ana@example.com").await;
        let bo = test_support::customer(&pool, "bo@example.com").await;
        let (table_id, slot_id) = seed_table(&pool, company.id).await;
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

        for user in [&ana, &bo, &ana] {
            create(&pool, user.id, company.id, table_id, slot_id, date, 2, 0)
                .await
                .unwrap();
        }

        let ids: Vec<i64> = find_reserving_users(&pool, company.id)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, [ana.id, bo.id, ana.id]);
    }

    #[tokio::test]
    async fn test_deleting_table_removes_reservations() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;
        let ana = test_support::customer(&pool, "ana@example.com").await;
        let (table_id, slot_id) = seed_table(&pool, company.id).await;
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        create(&pool, ana.id, company.id, table_id, slot_id, date, 2, 0)
            .await
            .unwrap();

        dining_table::delete(&pool, company.id, table_id).await.unwrap();
        assert!(find_by_user(&pool, ana.id).await.unwrap().is_empty());
    }
}
