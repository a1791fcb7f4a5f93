//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! request extractors before any service call is made.

use shared::models::{EmployeeRequest, EmployeeUpdate};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee name
pub const MAX_NAME_LEN: usize = 200;

/// Short labels: job position / title
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field)
        );
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate that an optional amount, if present, is not negative.
pub fn validate_non_negative(value: Option<i64>, field: &str) -> AppResult<()> {
    if let Some(v) = value
        && v < 0
    {
        return Err(
            AppError::validation(format!("{field} must not be negative ({v})"))
                .with_detail("field", field),
        );
    }
    Ok(())
}

/// Request payloads that check themselves before reaching a handler
pub trait Validate {
    fn validate(&self) -> AppResult<()>;
}

impl Validate for EmployeeRequest {
    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.position, "position", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative(self.salary, "salary")
    }
}

impl Validate for EmployeeUpdate {
    fn validate(&self) -> AppResult<()> {
        validate_optional_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.position, "position", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative(self.salary, "salary")
    }
}
