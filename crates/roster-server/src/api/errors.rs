//! Error handling for the Roster Server API
//!
//! This module contains standardized error handling for the API.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::error::ServerError;

/// Convert a server error into the standard error envelope
pub fn api_error_response(err: &ServerError) -> Response {
    let (status_code, error_code, error_message) = match err {
        ServerError::Conflict(msg) => (
            StatusCode::CONFLICT,
            "ERR_CONFLICT".to_string(),
            msg.clone(),
        ),
        ServerError::NotFound(resource) => (
            StatusCode::NOT_FOUND,
            format!("ERR_NOT_FOUND_{}", resource_code(resource)),
            format!("{} not found", resource),
        ),
        ServerError::ValidationError(msg) => (
            StatusCode::BAD_REQUEST,
            "ERR_VALIDATION_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::StateServiceError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_STATE_SERVICE_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::ConfigError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_CONFIG_ERROR".to_string(),
            msg.clone(),
        ),
        ServerError::InternalError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_INTERNAL_SERVER_ERROR".to_string(),
            msg.clone(),
        ),
    };

    let error_response = json!({
        "error": error_message,
        "errorDetails": {
            "errorCode": error_code,
            "errorMessage": error_message,
        }
    });

    (status_code, Json(error_response)).into_response()
}

/// "Employee 7" -> "EMPLOYEE"
fn resource_code(resource: &str) -> String {
    resource
        .split_whitespace()
        .next()
        .unwrap_or("RESOURCE")
        .to_uppercase()
}
