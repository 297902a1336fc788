//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reservation entity (预订)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub company_id: i64,
    pub table_id: i64,
    pub time_slot_id: i64,
    pub date: NaiveDate,
    pub party_size: i32,
    pub created_at: i64,
}

/// Book one slot of one table on one date
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    pub table_id: i64,
    pub time_slot_id: i64,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 50))]
    pub party_size: i32,
}
