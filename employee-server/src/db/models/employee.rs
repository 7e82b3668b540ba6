//! Employee Model
//!
//! [`Employee`] is the storage-facing entity; [`EmployeeDto`] is the
//! wire-facing view of the same data. Handlers only ever see the DTO — the
//! entity stays inside the repository/service pair.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use uuid::Uuid;

use super::serde_helpers;
use crate::utils::validation::{
    FieldViolation, MAX_EMAIL_LEN, MAX_FIRST_NAME_LEN, MAX_LAST_NAME_LEN, check_email,
    check_required_text,
};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Table holding employee records
pub const EMPLOYEE_TABLE: &str = "employee";

/// Employee entity matching the SurrealDB schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Wire-facing employee payload
///
/// Equality is value-based across all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Absent on create; forced to the path id on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeDto {
    /// Structural validation pass: required fields, lengths, email syntax.
    ///
    /// Returns the full list of violations so the client sees every broken
    /// field at once, not just the first.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        check_required_text(&mut violations, &self.email, "email", MAX_EMAIL_LEN);
        check_email(&mut violations, &self.email, "email");
        check_required_text(
            &mut violations,
            &self.first_name,
            "firstName",
            MAX_FIRST_NAME_LEN,
        );
        check_required_text(
            &mut violations,
            &self.last_name,
            "lastName",
            MAX_LAST_NAME_LEN,
        );
        violations
    }
}
