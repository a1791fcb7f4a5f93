//! Employee API Handlers
//!
//! Handlers decode and validate input through the extractors, make exactly
//! one service call and return the service result unchanged.

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{EmployeeRequest, EmployeeResponse, EmployeeUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::extract::{IdPath, ValidJson};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service().get_all_employees().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service().get_employee_by_id(id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service().create_employee(payload).await?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service().update_employee(id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.employee_service().delete_employee(id).await?;
    Ok(StatusCode::OK)
}
