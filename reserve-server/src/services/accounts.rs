//! 账号服务 - 顾客/餐厅注册与资料修改

use chrono::NaiveTime;
use shared::ErrorCode;
use shared::models::{Company, CompanyRegister, CompanyUpdate, CustomerRegister, User};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, company, user};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

/// Opening time for companies that register without work hours
pub fn default_work_hours_from() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

/// Closing time for companies that register without work hours
pub fn default_work_hours_to() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default()
}

pub async fn register_customer(pool: &SqlitePool, data: &CustomerRegister) -> AppResult<User> {
    validate_payload(data)?;
    ensure_email_free(pool, &data.email).await?;

    let created = user::create(
        pool,
        data.email.trim(),
        &data.first_name,
        &data.last_name,
        true,
        false,
        shared::util::now_millis(),
    )
    .await
    .map_err(email_conflict)?;

    tracing::info!(user_id = created.id, "Customer registered");
    Ok(created)
}

/// Create the company account and its profile row together
pub async fn register_company(pool: &SqlitePool, data: &CompanyRegister) -> AppResult<Company> {
    validate_payload(data)?;
    let from = data.work_hours_from.unwrap_or_else(default_work_hours_from);
    let to = data.work_hours_to.unwrap_or_else(default_work_hours_to);
    validate_work_hours(from, to)?;
    ensure_email_free(pool, &data.email).await?;

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    let account = user::create(
        &mut *tx,
        data.email.trim(),
        &data.first_name,
        &data.last_name,
        false,
        true,
        shared::util::now_millis(),
    )
    .await
    .map_err(email_conflict)?;
    let created = company::create(&mut *tx, account.id, data, from, to).await?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(company_id = created.id, name = %created.name, "Company registered");
    Ok(created)
}

/// Update the acting company's profile. Work hours are checked against the
/// stored values when only one bound changes.
pub async fn update_company(
    pool: &SqlitePool,
    company_id: i64,
    data: &CompanyUpdate,
) -> AppResult<Company> {
    validate_payload(data)?;

    let current = company::find_by_id(pool, company_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))?;
    validate_work_hours(
        data.work_hours_from.unwrap_or(current.work_hours_from),
        data.work_hours_to.unwrap_or(current.work_hours_to),
    )?;

    company::update(pool, company_id, data)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))
}

/// Opening must come strictly before closing
pub fn validate_work_hours(from: NaiveTime, to: NaiveTime) -> AppResult<()> {
    if from >= to {
        return Err(AppError::with_message(
            ErrorCode::InvalidWorkHours,
            format!("Work hours must open before they close ({from} - {to})"),
        ));
    }
    Ok(())
}

async fn ensure_email_free(pool: &SqlitePool, email: &str) -> AppResult<()> {
    if user::find_by_email(pool, email.trim()).await?.is_some() {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered).with_detail("email", email));
    }
    Ok(())
}

/// A concurrent registration can still hit the unique index
fn email_conflict(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailAlreadyRegistered),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn company_form(email: &str) -> CompanyRegister {
        CompanyRegister {
            email: email.to_string(),
            first_name: "Marta".to_string(),
            last_name: "Ruiz".to_string(),
            name: "Casa Marta".to_string(),
            address: Some("Calle Mayor 1".to_string()),
            phone: None,
            description: None,
            work_hours_from: None,
            work_hours_to: None,
        }
    }

    #[tokio::test]
    async fn test_register_customer() {
        let pool = test_support::pool().await;
        let form = CustomerRegister {
            email: "ana@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
        };
        let created = register_customer(&pool, &form).await.unwrap();
        assert!(created.is_customer);
        assert!(!created.is_company);

        let err = register_customer(&pool, &form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let pool = test_support::pool().await;
        test_support::customer(&pool, "ana@example.com").await;
        let err = register_company(&pool, &company_form("ANA@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn test_register_company_defaults_hours() {
        let pool = test_support::pool().await;
        let created = register_company(&pool, &company_form("casa@example.com"))
            .await
            .unwrap();
        assert_eq!(created.work_hours_from, t(9, 0));
        assert_eq!(created.work_hours_to, t(22, 0));

        let account = user::find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert!(account.is_company);
        assert_eq!(account.first_name, "Marta");
    }

    #[tokio::test]
    async fn test_register_company_rejects_inverted_hours() {
        let pool = test_support::pool().await;
        let mut form = company_form("casa@example.com");
        form.work_hours_from = Some(t(18, 0));
        form.work_hours_to = Some(t(12, 0));

        let err = register_company(&pool, &form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWorkHours);
        assert!(user::find_by_email(&pool, "casa@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_company_checks_against_stored_hours() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;

        // stored hours are 09:00 - 17:00
        let closing_early = CompanyUpdate {
            work_hours_to: Some(t(8, 0)),
            ..Default::default()
        };
        let err = update_company(&pool, company.id, &closing_early).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWorkHours);

        let later = CompanyUpdate {
            work_hours_to: Some(t(23, 0)),
            phone: Some("+34 600 000 000".to_string()),
            ..Default::default()
        };
        let updated = update_company(&pool, company.id, &later).await.unwrap();
        assert_eq!(updated.work_hours_to, t(23, 0));
        assert_eq!(updated.work_hours_from, t(9, 0));
        assert_eq!(updated.phone.as_deref(), Some("+34 600 000 000"));
    }

    #[tokio::test]
    async fn test_update_missing_company() {
        let pool = test_support::pool().await;
        let err = update_company(&pool, 42, &CompanyUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }
}
