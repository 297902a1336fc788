//! 统一错误处理
//!
//! Re-exports the shared error system so handlers only import from
//! `crate::utils`.
//!
//! ```ignore
//! Err(AppError::new(ErrorCode::TableNotFound))
//! ```

pub use shared::error::{AppError, AppResult, ErrorCode};
