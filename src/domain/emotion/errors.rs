//! Emotion journal error types.

use crate::domain::foundation::{DomainError, EmotionRecordId, ErrorCode, ValidationError};

/// Errors surfaced by emotion commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionError {
    /// Record was not found.
    NotFound(EmotionRecordId),
    /// Record belongs to another user.
    Forbidden,
    /// Input rejected before reaching the store.
    ValidationFailed { field: String, message: String },
    /// The persistence medium could not be read or written.
    StorageUnavailable(String),
}

impl EmotionError {
    pub fn not_found(id: EmotionRecordId) -> Self {
        EmotionError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        EmotionError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EmotionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        EmotionError::StorageUnavailable(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            EmotionError::NotFound(_) => ErrorCode::EmotionNotFound,
            EmotionError::Forbidden => ErrorCode::Forbidden,
            EmotionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EmotionError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            EmotionError::NotFound(id) => format!("Emotion record not found: {}", id),
            EmotionError::Forbidden => "Record belongs to another user".to_string(),
            EmotionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            EmotionError::StorageUnavailable(msg) => format!("Storage unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for EmotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EmotionError {}

impl From<ValidationError> for EmotionError {
    fn from(err: ValidationError) -> Self {
        EmotionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for EmotionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => EmotionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::Forbidden => EmotionError::Forbidden,
            _ => EmotionError::StorageUnavailable(err.message),
        }
    }
}
