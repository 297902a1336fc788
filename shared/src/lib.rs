//! Shared types for the reservation service
//!
//! Data models and the unified error system used by the server and by
//! anything that talks to its API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
