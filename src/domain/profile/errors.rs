//! User profile error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Errors surfaced by profile commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// No profile with this id.
    NotFound(UserId),
    /// Input rejected before reaching the store.
    ValidationFailed { field: String, message: String },
    /// The persistence medium could not be read or written.
    StorageUnavailable(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("User not found: {}", id),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::StorageUnavailable(msg) => format!("Storage unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => UserError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => UserError::StorageUnavailable(err.message),
        }
    }
}
