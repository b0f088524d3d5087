//! Employee store over a plain ordered collection.
//!
//! # Responsibility
//! - Map decoded file rows to records and back.
//! - Provide lookup, insert, update, remove and id allocation.
//!
//! # Invariants
//! - Record order is file order; mutations never reorder surviving records.
//! - `allocate_id` returns the smallest free id in `[1, MAX_EMPLOYEE_ID)`.

use super::{StoreError, StoreResult, MAX_EMPLOYEE_ID};
use crate::model::employee::{format_wage, Employee, EmployeeFields, EmployeeId};

/// Field layout of one roster file row: id, first name, last name, email,
/// hourly wage.
const RECORD_FIELD_COUNT: usize = 5;

/// The authoritative in-memory collection of employee records.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from decoded file rows. Called once at startup.
    ///
    /// # Errors
    /// - `InvalidRow` when a row has the wrong field count or a numeric
    ///   column fails coercion.
    pub fn from_rows(rows: &[Vec<String>]) -> StoreResult<Self> {
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            records.push(parse_employee_row(index, row)?);
        }
        Ok(Self { records })
    }

    /// Serializes every record back into file rows, preserving store order.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(employee_to_row).collect()
    }

    /// Linear scan by id; first match wins.
    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the smallest id in `[1, MAX_EMPLOYEE_ID)` not used by any
    /// record.
    ///
    /// # Errors
    /// - `IdSpaceExhausted` when the whole range is taken. The ceiling is a
    ///   hard constant, not runtime configurable.
    pub fn allocate_id(&self) -> StoreResult<EmployeeId> {
        (1..MAX_EMPLOYEE_ID)
            .find(|candidate| self.find_by_id(*candidate).is_none())
            .ok_or(StoreError::IdSpaceExhausted)
    }

    /// Appends a record, trusting the caller to have allocated a fresh id.
    pub fn insert(&mut self, employee: Employee) {
        self.records.push(employee);
    }

    /// Replaces all editable fields of the record with `id`.
    ///
    /// # Errors
    /// - `NotFound` when no record carries `id`; the store is unchanged.
    pub fn update(&mut self, id: EmployeeId, fields: EmployeeFields) -> StoreResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(fields);
        Ok(())
    }

    /// Deletes the record with `id`, preserving the order of the rest.
    ///
    /// # Errors
    /// - `NotFound` when no record carries `id`; the store is unchanged.
    pub fn remove(&mut self, id: EmployeeId) -> StoreResult<()> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(position);
        Ok(())
    }

    /// Current records in insertion/file order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_employee_row(index: usize, row: &[String]) -> StoreResult<Employee> {
    if row.len() != RECORD_FIELD_COUNT {
        return Err(StoreError::InvalidRow {
            row: index,
            message: format!(
                "expected {RECORD_FIELD_COUNT} fields, got {}",
                row.len()
            ),
        });
    }

    let id = row[0]
        .parse::<EmployeeId>()
        .map_err(|_| StoreError::InvalidRow {
            row: index,
            message: format!("invalid employee id `{}`", row[0]),
        })?;

    let hourly_wage = row[4].parse::<f64>().map_err(|_| StoreError::InvalidRow {
        row: index,
        message: format!("invalid hourly wage `{}`", row[4]),
    })?;

    Ok(Employee {
        id,
        first_name: row[1].clone(),
        last_name: row[2].clone(),
        email: row[3].clone(),
        hourly_wage,
    })
}

fn employee_to_row(employee: &Employee) -> Vec<String> {
    vec![
        employee.id.to_string(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.email.clone(),
        format_wage(employee.hourly_wage),
    ]
}
