//! Employee records API
//!
//! This module contains the handlers for the employee endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, error};

use roster_core::{Employee, EmployeeId};

use crate::api::errors::api_error_response;
use crate::error::ServerError;
use crate::server::RosterServer;

fn not_found(id: EmployeeId) -> axum::response::Response {
    api_error_response(&ServerError::NotFound(format!("Employee {}", id)))
}

/// Handler for creating an employee
pub async fn create_employee_handler(
    State(server): State<Arc<RosterServer>>,
    Json(candidate): Json<Employee>,
) -> impl IntoResponse {
    info!(email = %candidate.email, "Creating employee");

    match server.create_employee(candidate).await {
        Ok(employee) => {
            (StatusCode::CREATED, Json(employee)).into_response()
        },
        Err(err) => {
            if err.is_client_error() {
                info!(%err, "Rejected employee creation");
            } else {
                error!(?err, "Failed to create employee");
            }
            api_error_response(&err)
        }
    }
}

/// Handler for listing employees
pub async fn list_employees_handler(
    State(server): State<Arc<RosterServer>>,
) -> impl IntoResponse {
    info!("Listing all employees");

    match server.list_employees().await {
        Ok(employees) => {
            (StatusCode::OK, Json(employees)).into_response()
        },
        Err(err) => {
            error!(?err, "Failed to list employees");
            api_error_response(&err)
        }
    }
}

/// Handler for getting an employee by ID
pub async fn get_employee_handler(
    State(server): State<Arc<RosterServer>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let id = EmployeeId(id);
    info!(employee_id = %id, "Getting employee");

    match server.get_employee(id).await {
        Ok(Some(employee)) => {
            (StatusCode::OK, Json(employee)).into_response()
        },
        Ok(None) => not_found(id),
        Err(err) => {
            error!(?err, employee_id = %id, "Failed to get employee");
            api_error_response(&err)
        }
    }
}

/// Handler for updating an employee
pub async fn update_employee_handler(
    State(server): State<Arc<RosterServer>>,
    Path(id): Path<i64>,
    Json(patch): Json<Employee>,
) -> impl IntoResponse {
    let id = EmployeeId(id);
    info!(employee_id = %id, "Updating employee");

    match server.update_employee(id, patch).await {
        Ok(Some(employee)) => {
            (StatusCode::OK, Json(employee)).into_response()
        },
        Ok(None) => not_found(id),
        Err(err) => {
            error!(?err, employee_id = %id, "Failed to update employee");
            api_error_response(&err)
        }
    }
}

/// Handler for deleting an employee
pub async fn delete_employee_handler(
    State(server): State<Arc<RosterServer>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let id = EmployeeId(id);
    info!(employee_id = %id, "Deleting employee");

    match server.delete_employee(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!(?err, employee_id = %id, "Failed to delete employee");
            api_error_response(&err)
        }
    }
}
