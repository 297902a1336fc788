//! Data models
//!
//! Shared between the reservation server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod company;
pub mod dining_table;
pub mod menu;
pub mod photo;
pub mod reservation;
pub mod user;

// Re-exports
pub use company::*;
pub use dining_table::*;
pub use menu::*;
pub use photo::*;
pub use reservation::*;
pub use user::*;
