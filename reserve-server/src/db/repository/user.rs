//! User Repository

use super::RepoResult;
use shared::models::{User, UserUpdate};
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str =
    "id, email, first_name, last_name, is_customer, is_company, is_active, date_joined";

pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM account WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM account WHERE email = ? COLLATE NOCASE"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    email: &str,
    first_name: &str,
    last_name: &str,
    is_customer: bool,
    is_company: bool,
    now: i64,
) -> RepoResult<User> {
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO account (email, first_name, last_name, is_customer, is_company, is_active, date_joined) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6) RETURNING {COLUMNS}"
    ))
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(is_customer)
    .bind(is_company)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(user)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &UserUpdate) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE account SET first_name = COALESCE(?1, first_name), last_name = COALESCE(?2, last_name) WHERE id = ?3 RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{RepoError, test_support};

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_support::pool().await;
        let user = create(&pool, "ana@example.com", "Ana", "Diaz", true, false, 42)
            .await
            .unwrap();
        assert!(user.is_customer);
        assert!(!user.is_company);
        assert!(user.is_active);
        assert_eq!(user.date_joined, 42);

        let found = find_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(found, user);
        let by_email = find_by_email(&pool, "ANA@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let pool = test_support::pool().await;
        create(&pool, "dup@example.com", "", "", true, false, 0)
            .await
            .unwrap();
        let err = create(&pool, "dup@example.com", "", "", true, false, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_missing_fields() {
        let pool = test_support::pool().await;
        let user = test_support::customer(&pool, "x@example.com").await;
        let updated = update(
            &pool,
            user.id,
            &UserUpdate {
                first_name: Some("Bea".into()),
                last_name: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.first_name, "Bea");
        assert_eq!(updated.last_name, "Diaz");

        assert!(update(&pool, 9999, &UserUpdate::default()).await.unwrap().is_none());
    }
}
