//! Employee Model

use serde::{Deserialize, Serialize};
use shared::models::EmployeeResponse;

/// Employee ID type
pub type EmployeeId = i64;

/// Employee record as stored in the `employees` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Field values for a record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub salary: i64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            salary: employee.salary,
            created_at: Some(employee.created_at),
            updated_at: Some(employee.updated_at),
        }
    }
}
