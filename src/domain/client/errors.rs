//! Client-specific error types.

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ValidationError};

/// Client-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Client was not found.
    NotFound(ClientId),

    /// Field-level validation failure.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ClientError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::NotFound(_) => ErrorCode::ClientNotFound,
            ClientError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ClientError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::NotFound(id) => format!("Client not found: {}", id),
            ClientError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ClientError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        ClientError::Infrastructure(err.to_string())
    }
}
