use thiserror::Error;

/// Core error type for the Roster service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An employee with the given email already exists
    #[error("Employee already exists with given email: {email}")]
    Conflict {
        /// The email that collided with an existing record
        email: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// State store error
    #[error("State store error: {0}")]
    StateStoreError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                CoreError::Conflict { email: "e@x.com".to_string() },
                "Employee already exists with given email: e@x.com",
            ),
            (CoreError::ValidationError("invalid".to_string()), "Validation error: invalid"),
            (CoreError::StateStoreError("db_err".to_string()), "State store error: db_err"),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }
}
