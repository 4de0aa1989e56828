//! Error types for teamsplit

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for allocation operations
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The request failed pre-flight validation.
    ///
    /// Carries the first blocking error; its message is surfaced verbatim.
    #[error("{0}")]
    Validation(ValidationError),

    /// Internal consistency fault (should not occur after a passing validation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AllocationError {
    /// Returns the validation error behind this failure, if any.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            AllocationError::Validation(err) => Some(err),
            AllocationError::Internal(_) => None,
        }
    }
}

impl From<ValidationError> for AllocationError {
    fn from(err: ValidationError) -> Self {
        AllocationError::Validation(err)
    }
}

/// Result type alias for allocation operations
pub type Result<T> = std::result::Result<T, AllocationError>;
