//! Domain model for roster records.
//!
//! # Responsibility
//! - Define the canonical employee record shared by store, persistence and
//!   shell layers.
//!
//! # Invariants
//! - Every record is identified by a positive `EmployeeId`, unique within a
//!   store.

pub mod employee;
