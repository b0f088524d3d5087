//! Roster use-case service.
//!
//! # Responsibility
//! - Pair the in-memory employee store with its backing file path.
//! - Provide the CRUD surface consumed by interactive frontends.
//!
//! # Invariants
//! - `open` is the only constructor; the store always mirrors a file that
//!   existed at startup.
//! - Mutations touch memory only; callers decide when `save` flushes.

use crate::model::employee::{Employee, EmployeeFields, EmployeeId};
use crate::persist::{self, PersistError};
use crate::store::employee_store::EmployeeStore;
use crate::store::StoreError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    Persist(PersistError),
}

impl ServiceError {
    /// True when the failure is a lookup miss the caller can recover from by
    /// asking for another id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound(_)))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Use-case facade owning the record store and its backing path.
#[derive(Debug)]
pub struct RosterService {
    store: EmployeeStore,
    data_path: PathBuf,
}

impl RosterService {
    /// Loads the roster file at `path` into a fresh service.
    ///
    /// # Errors
    /// - Any read or row-coercion failure. Callers treat this as fatal at
    ///   startup; there is no fallback to an empty roster.
    pub fn open(path: impl Into<PathBuf>) -> ServiceResult<Self> {
        let data_path = path.into();
        let rows = persist::load_rows(&data_path)?;
        let store = EmployeeStore::from_rows(&rows)?;
        info!(
            "event=roster_open module=service status=ok records={} path={}",
            store.len(),
            data_path.display()
        );
        Ok(Self { store, data_path })
    }

    /// Flushes the full record set back over the backing file.
    pub fn save(&self) -> ServiceResult<()> {
        persist::save_rows(&self.data_path, &self.store.to_rows())?;
        Ok(())
    }

    /// Current records in file order.
    pub fn list(&self) -> &[Employee] {
        self.store.records()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.store.find_by_id(id)
    }

    /// Creates a record from operator fields, returning the allocated id.
    ///
    /// # Errors
    /// - `IdSpaceExhausted` when no id is free; the roster is unchanged.
    pub fn add(&mut self, fields: EmployeeFields) -> ServiceResult<EmployeeId> {
        let id = self.store.allocate_id()?;
        self.store.insert(Employee::new(id, fields));
        info!("event=roster_add module=service status=ok id={id}");
        Ok(id)
    }

    /// Replaces all editable fields of the record with `id`.
    pub fn update(&mut self, id: EmployeeId, fields: EmployeeFields) -> ServiceResult<()> {
        self.store.update(id, fields)?;
        info!("event=roster_update module=service status=ok id={id}");
        Ok(())
    }

    /// Deletes the record with `id`.
    pub fn remove(&mut self, id: EmployeeId) -> ServiceResult<()> {
        self.store.remove(id)?;
        info!("event=roster_remove module=service status=ok id={id}");
        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
