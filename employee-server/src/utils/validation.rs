//! Input validation helpers
//!
//! Centralized field limits and the structural validation pass that runs in
//! the handlers before any service dispatch. Violations collected here never
//! reach the service layer; they short-circuit as a 422 response.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Field length limits (match the storage column widths) ───────────

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 255;

/// First names
pub const MAX_FIRST_NAME_LEN: usize = 50;

/// Last names
pub const MAX_LAST_NAME_LEN: usize = 100;

/// A single field violation produced by the structural validation pass
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a required string: non-blank and within the length limit
pub fn check_required_text(
    violations: &mut Vec<FieldViolation>,
    value: &str,
    field: &'static str,
    max_len: usize,
) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, "must not be blank"));
    } else if value.len() > max_len {
        violations.push(FieldViolation::new(
            field,
            format!("length must be at most {max_len} ({} given)", value.len()),
        ));
    }
}

/// Check email syntax (blank values are reported by the required-text check)
pub fn check_email(violations: &mut Vec<FieldViolation>, value: &str, field: &'static str) {
    if !value.trim().is_empty() && !value.validate_email() {
        violations.push(FieldViolation::new(
            field,
            "must be a well-formed email address",
        ));
    }
}

/// Collapse violations into the 422 error carried to the client
pub fn reject_on_violations(violations: Vec<FieldViolation>) -> Result<(), AppError> {
    if violations.is_empty() {
        return Ok(());
    }
    let joined = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::Validation(joined))
}
