//! Employee route handlers
//!
//! Six CRUD endpoints under /api/employees, each wrapping the service
//! result in the success envelope. Failures convert to HTTP responses
//! through `AppError::into_response`.

use crate::error::{validation_error, ApiResult};
use crate::models::{Employee, EmployeeRequest, SuccessResponse};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

/// Create a new employee
pub async fn create_employee(
    State(state): State<SharedState>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Employee>>)> {
    debug!("Creating employee: {}", payload.email);
    payload.validate().map_err(|e| validation_error(e.to_string()))?;

    let created = state.employees.create(payload.into_employee(None)).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(
            "Employee added successfully",
            StatusCode::CREATED,
            created,
        )),
    ))
}

/// Get a single employee by id
pub async fn get_employee(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SuccessResponse<Employee>>> {
    debug!("Getting employee: {}", id);

    let employee = state.employees.get(id).await?;

    Ok(Json(SuccessResponse::with_data(
        "Employee retrieved successfully",
        StatusCode::OK,
        employee,
    )))
}

/// List all employees
pub async fn list_employees(
    State(state): State<SharedState>,
) -> ApiResult<Json<SuccessResponse<Vec<Employee>>>> {
    debug!("Listing all employees");

    let employees = state.employees.list_all().await?;

    Ok(Json(SuccessResponse::with_data(
        "All employees retrieved successfully",
        StatusCode::OK,
        employees,
    )))
}

/// Update an existing employee. The path id is authoritative; any id in
/// the body is ignored.
pub async fn update_employee(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<Json<SuccessResponse<Employee>>> {
    debug!("Updating employee: {}", id);

    let updated = state.employees.update(payload.into_employee(Some(id))).await?;

    Ok(Json(SuccessResponse::with_data(
        "Employee updated successfully",
        StatusCode::OK,
        updated,
    )))
}

/// Delete a single employee, returning its pre-deletion record
pub async fn delete_employee(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SuccessResponse<Employee>>> {
    debug!("Deleting employee: {}", id);

    let deleted = state.employees.delete(id).await?;

    Ok(Json(SuccessResponse::with_data(
        "Employee deleted successfully",
        StatusCode::OK,
        deleted,
    )))
}

/// Delete every employee, returning the records as they existed before
pub async fn delete_all_employees(
    State(state): State<SharedState>,
) -> ApiResult<Json<SuccessResponse<Vec<Employee>>>> {
    debug!("Deleting all employees");

    let deleted = state.employees.delete_all().await?;

    Ok(Json(SuccessResponse::with_data(
        "All employees deleted successfully",
        StatusCode::OK,
        deleted,
    )))
}
