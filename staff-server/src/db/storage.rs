//! redb-based storage layer for employees
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `employees` | `id` | `Employee` (JSON) | Employee records |
//! | `sequence_counter` | `"employee_id"` | `i64` | Last assigned employee id |
//!
//! # Durability
//!
//! Every mutation runs in a single write transaction, so a create, update or
//! delete is either fully applied or not at all. Ids come from the sequence
//! counter and are never reused, even after a delete.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::util::now_millis;
use thiserror::Error;

use crate::db::models::{Employee, EmployeeDraft, EmployeeId};

/// Table for employee records: key = employee id, value = JSON-serialized Employee
const EMPLOYEES_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("employees");

/// Table for sequence counters: key = counter name, value = last issued value
const SEQUENCE_TABLE: TableDefinition<&str, i64> = TableDefinition::new("sequence_counter");

const EMPLOYEE_SEQUENCE_KEY: &str = "employee_id";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Employee storage backed by redb
#[derive(Clone)]
pub struct EmployeeStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for EmployeeStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeStorage").finish_non_exhaustive()
    }
}

impl EmployeeStorage {
    /// Open or create the database at the given path
    ///
    /// Parent directories are created when missing.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(EMPLOYEES_TABLE)?;

            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(EMPLOYEE_SEQUENCE_KEY)?.is_none() {
                seq_table.insert(EMPLOYEE_SEQUENCE_KEY, 0i64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Queries ==========

    /// All employees ordered by id
    pub fn list(&self) -> StorageResult<Vec<Employee>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;

        let mut employees = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let employee: Employee = serde_json::from_slice(value.value())?;
            employees.push(employee);
        }

        Ok(employees)
    }

    /// Get an employee by id
    pub fn get(&self, id: EmployeeId) -> StorageResult<Option<Employee>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;

        match table.get(id)? {
            Some(value) => {
                let employee: Employee = serde_json::from_slice(value.value())?;
                Ok(Some(employee))
            }
            None => Ok(None),
        }
    }

    /// Last id handed out by the sequence (0 when nothing was created yet)
    pub fn current_sequence(&self) -> StorageResult<i64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SEQUENCE_TABLE)?;
        Ok(table
            .get(EMPLOYEE_SEQUENCE_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    // ========== Mutations ==========

    /// Insert a new employee, assigning the next id
    pub fn insert(&self, draft: EmployeeDraft) -> StorageResult<Employee> {
        let txn = self.db.begin_write()?;
        let employee = {
            let mut seq_table = txn.open_table(SEQUENCE_TABLE)?;
            let current = seq_table
                .get(EMPLOYEE_SEQUENCE_KEY)?
                .map(|guard| guard.value())
                .unwrap_or(0);
            let id = current + 1;
            seq_table.insert(EMPLOYEE_SEQUENCE_KEY, id)?;

            let now = now_millis();
            let employee = Employee {
                id,
                name: draft.name,
                position: draft.position,
                salary: draft.salary,
                created_at: now,
                updated_at: now,
            };

            let bytes = serde_json::to_vec(&employee)?;
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            table.insert(id, bytes.as_slice())?;
            employee
        };
        txn.commit()?;

        Ok(employee)
    }

    /// Apply `apply` to an existing employee and persist the result
    ///
    /// Returns `None` (and writes nothing) when the id does not exist.
    /// `updated_at` is refreshed after `apply` runs.
    pub fn update<F>(&self, id: EmployeeId, apply: F) -> StorageResult<Option<Employee>>
    where
        F: FnOnce(&mut Employee),
    {
        let txn = self.db.begin_write()?;
        let updated = {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            let existing: Option<Employee> = match table.get(id)? {
                Some(value) => Some(serde_json::from_slice(value.value())?),
                None => None,
            };

            match existing {
                Some(mut employee) => {
                    apply(&mut employee);
                    employee.id = id;
                    employee.updated_at = now_millis().max(employee.created_at);

                    let bytes = serde_json::to_vec(&employee)?;
                    table.insert(id, bytes.as_slice())?;
                    Some(employee)
                }
                None => None,
            }
        };

        if updated.is_some() {
            txn.commit()?;
        } else {
            txn.abort()?;
        }

        Ok(updated)
    }

    /// Remove an employee, returning whether a record was deleted
    pub fn remove(&self, id: EmployeeId) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            let removed = table.remove(id)?.is_some();
            removed
        };
        txn.commit()?;
        Ok(removed)
    }
}
