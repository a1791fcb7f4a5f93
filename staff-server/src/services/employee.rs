//! Employee Service
//!
//! [`EmployeeService`] is the seam between the HTTP endpoint and persistence.
//! Handlers only talk to the trait; [`EmployeeManager`] is the redb-backed
//! implementation wired in by [`crate::core::ServerState::initialize`].

use async_trait::async_trait;
use shared::models::{EmployeeRequest, EmployeeResponse, EmployeeUpdate};

use crate::db::models::{EmployeeDraft, EmployeeId};
use crate::db::{EmployeeStorage, StorageError};
use crate::utils::{AppError, AppResult};

/// Employee operations exposed to the HTTP layer
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// All employees ordered by id
    async fn get_all_employees(&self) -> AppResult<Vec<EmployeeResponse>>;

    /// A single employee, `EmployeeNotFound` when absent
    async fn get_employee_by_id(&self, id: EmployeeId) -> AppResult<EmployeeResponse>;

    /// Create an employee and return it with its assigned id
    async fn create_employee(&self, request: EmployeeRequest) -> AppResult<EmployeeResponse>;

    /// Merge the present fields of `update` into an existing employee
    async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> AppResult<EmployeeResponse>;

    /// Delete an employee; deleting a missing id is not an error
    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()>;
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::database(err.to_string())
    }
}

/// 员工管理器 - 基于 redb 存储的 [`EmployeeService`] 实现
#[derive(Debug, Clone)]
pub struct EmployeeManager {
    storage: EmployeeStorage,
}

impl EmployeeManager {
    pub fn new(storage: EmployeeStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &EmployeeStorage {
        &self.storage
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn get_all_employees(&self) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.storage.list()?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    async fn get_employee_by_id(&self, id: EmployeeId) -> AppResult<EmployeeResponse> {
        self.storage
            .get(id)?
            .map(EmployeeResponse::from)
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    async fn create_employee(&self, request: EmployeeRequest) -> AppResult<EmployeeResponse> {
        let draft = EmployeeDraft {
            name: request.name.trim().to_string(),
            position: request.position.trim().to_string(),
            salary: request.salary.unwrap_or(0),
        };
        let employee = self.storage.insert(draft)?;

        tracing::info!(
            employee_id = employee.id,
            position = %employee.position,
            "Employee created"
        );
        Ok(employee.into())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> AppResult<EmployeeResponse> {
        if update.is_empty() {
            return self.get_employee_by_id(id).await;
        }

        let updated = self.storage.update(id, |employee| {
            if let Some(name) = update.name {
                employee.name = name.trim().to_string();
            }
            if let Some(position) = update.position {
                employee.position = position.trim().to_string();
            }
            if let Some(salary) = update.salary {
                employee.salary = salary;
            }
        })?;

        match updated {
            Some(employee) => {
                tracing::info!(employee_id = id, "Employee updated");
                Ok(employee.into())
            }
            None => Err(AppError::employee_not_found(id)),
        }
    }

    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()> {
        if self.storage.remove(id)? {
            tracing::info!(employee_id = id, "Employee deleted");
        } else {
            tracing::debug!(employee_id = id, "Delete skipped, employee not found");
        }
        Ok(())
    }
}
