//! Company Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Restaurant account profile (餐厅)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Company {
    /// Same as the owning user id
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub work_hours_from: NaiveTime,
    pub work_hours_to: NaiveTime,
}

/// Register company payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyRegister {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub last_name: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Defaults to 09:00
    pub work_hours_from: Option<NaiveTime>,
    /// Defaults to 22:00
    pub work_hours_to: Option<NaiveTime>,
}

/// Update company payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub work_hours_from: Option<NaiveTime>,
    pub work_hours_to: Option<NaiveTime>,
}
