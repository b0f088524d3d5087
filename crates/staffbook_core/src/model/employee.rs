//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical roster record and its operator-editable field set.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes afterwards.
//! - Uniqueness of `id` is enforced by the store's allocator, not here.

use serde::{Deserialize, Serialize};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u32;

/// One employee's stored attributes.
///
/// Field names serialize in the roster file's column naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hourly_wage: f64,
}

/// The four operator-editable fields of a record.
///
/// `id` is deliberately absent: add allocates it and update never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hourly_wage: f64,
}

impl Employee {
    /// Builds a record from an allocated id and operator-supplied fields.
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            hourly_wage: fields.hourly_wage,
        }
    }

    /// Replaces every editable field in place, keeping `id`.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.hourly_wage = fields.hourly_wage;
    }

    /// Display name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Renders a wage the way the roster file stores it.
///
/// Uses the shortest `f64` form (`20`, `15.5`) so a store loaded from a
/// canonically formatted file saves back the same bytes.
pub fn format_wage(wage: f64) -> String {
    wage.to_string()
}
