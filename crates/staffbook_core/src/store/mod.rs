//! In-memory record store and its error taxonomy.
//!
//! # Responsibility
//! - Hold the authoritative collection of employee records for the process
//!   lifetime.
//! - Return semantic errors (`NotFound`) in addition to coercion failures.
//!
//! # Invariants
//! - Id uniqueness is maintained by allocating through `allocate_id`; a
//!   hand-edited backing file with colliding ids is not defensively checked.

use crate::model::employee::EmployeeId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee_store;

/// Upper bound (exclusive) of the id space scanned by the allocator.
pub const MAX_EMPLOYEE_ID: EmployeeId = 100_000;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// No record with the requested id exists.
    NotFound(EmployeeId),
    /// Every id in `[1, MAX_EMPLOYEE_ID)` is taken.
    IdSpaceExhausted,
    /// A backing-file row failed shape or numeric coercion checks.
    InvalidRow { row: usize, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::IdSpaceExhausted => {
                write!(f, "no free employee id below {MAX_EMPLOYEE_ID}")
            }
            Self::InvalidRow { row, message } => {
                write!(f, "invalid record row {row}: {message}")
            }
        }
    }
}

impl Error for StoreError {}
