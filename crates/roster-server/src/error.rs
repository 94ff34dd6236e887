//! Error types for the Roster Server
//!
//! This module contains the error types used throughout the server.

use thiserror::Error;
use roster_core::CoreError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// State service error
    #[error("State service error: {0}")]
    StateServiceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Conflict { .. } => ServerError::Conflict(err.to_string()),
            CoreError::ValidationError(msg) => ServerError::ValidationError(msg),
            CoreError::StateStoreError(msg) => ServerError::StateServiceError(msg),
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

impl ServerError {
    /// Check if the error is caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServerError::Conflict(_) | ServerError::NotFound(_) | ServerError::ValidationError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_keeps_email_in_message() {
        let err: ServerError = CoreError::Conflict { email: "e@x.com".to_string() }.into();

        assert!(matches!(err, ServerError::Conflict(_)));
        assert!(err.to_string().contains("e@x.com"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_store_error_is_server_side() {
        let err: ServerError = CoreError::StateStoreError("pool timed out".to_string()).into();

        assert!(matches!(err, ServerError::StateServiceError(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(ServerError::NotFound("Employee 7".to_string()).to_string(), "Employee 7 not found");
    }
}
