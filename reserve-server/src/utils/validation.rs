//! Input validation helpers
//!
//! Request payloads derive [`validator::Validate`]; [`validate_payload`]
//! turns the collected field errors into a single `ValidationFailed`
//! [`AppError`] whose details list the failing rules per field.

use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: company, menu item
pub const MAX_NAME_LEN: usize = 200;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Helpers ─────────────────────────────────────────────────────────

/// Run the derived validation rules of a payload
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(into_app_error)
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let names: Vec<&str> = fields.iter().map(|(name, _)| &**name).collect();
    let mut err = AppError::validation(format!("Invalid fields: {}", names.join(", ")));
    for (name, rules) in &fields {
        let codes: Vec<Value> = rules.iter().map(|e| Value::from(e.code.to_string())).collect();
        err = err.with_detail(name.to_string(), Value::Array(codes));
    }
    err
}
