//! User Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account entity (顾客或餐厅账号)
///
/// A company account owns exactly one [`super::Company`] row sharing its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_customer: bool,
    pub is_company: bool,
    pub is_active: bool,
    /// Unix millis
    pub date_joined: i64,
}

/// Register customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerRegister {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub last_name: String,
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(max = 30))]
    pub first_name: Option<String>,
    #[validate(length(max = 30))]
    pub last_name: Option<String>,
}
