//! Repository Module
//!
//! Plain async functions over sqlx executors, one module per table.
//! Functions that must run inside a transaction take a generic
//! [`sqlx::SqliteExecutor`] so callers can pass `&mut *tx` or the pool.

// Accounts
pub mod company;
pub mod user;

// Tables & availability
pub mod dining_table;
pub mod reservation;

// Catalog
pub mod menu;
pub mod photo;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    //! Seed helpers shared by repository and service tests

    use crate::db::DbService;
    use shared::models::{Company, CompanyRegister, User};
    use sqlx::SqlitePool;

    pub async fn pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    pub async fn customer(pool: &SqlitePool, email: &str) -> User {
        super::user::create(pool, email, "Ana", "Diaz", true, false, 1_000)
            .await
            .unwrap()
    }

    /// Company open 09:00–17:00
    pub async fn company(pool: &SqlitePool, email: &str) -> Company {
        let user = super::user::create(pool, email, "", "", false, true, 1_000)
            .await
            .unwrap();
        let data = CompanyRegister {
            email: email.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            name: "La Mesa".to_string(),
            address: None,
            phone: None,
            description: None,
            work_hours_from: None,
            work_hours_to: None,
        };
        super::company::create(
            pool,
            user.id,
            &data,
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
        .await
        .unwrap()
    }
}
