//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee response
///
/// `created_at` / `updated_at` are epoch millis; they stay `null` when the
/// producer does not track timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: i64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl EmployeeResponse {
    /// Build a response without timestamps
    pub fn new(id: i64, name: impl Into<String>, position: impl Into<String>, salary: i64) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Create employee payload
///
/// Missing `name` / `position` deserialize as empty strings so they are
/// rejected by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

/// Update employee payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

impl EmployeeUpdate {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.salary.is_none()
    }
}
