//! Dining Table Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the table stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TablePlace {
    Inside,
    Outside,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub company_id: i64,
    /// Seats
    pub size: i32,
    pub table_place: TablePlace,
    pub created_at: i64,
}

/// Half-hour slot owned by one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TimeSlot {
    pub id: i64,
    pub table_id: i64,
    pub free_time: NaiveTime,
    pub reserved: bool,
}

/// Bookable date owned by one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableDate {
    pub id: i64,
    pub table_id: i64,
    pub date: NaiveDate,
}

/// Provision tables payload: `amount` tables of `size` seats at `table_place`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableProvision {
    #[validate(range(min = 1, max = 50))]
    pub amount: i32,
    #[validate(range(min = 1, max = 50))]
    pub size: i32,
    pub table_place: TablePlace,
}

/// Table with its full availability grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDetail {
    #[serde(flatten)]
    pub table: DiningTable,
    pub times: Vec<TimeSlot>,
    pub dates: Vec<TableDate>,
}

/// A company's tables split by place, each list ordered by size
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyTables {
    pub inside_tables: Vec<DiningTable>,
    pub outside_tables: Vec<DiningTable>,
}
