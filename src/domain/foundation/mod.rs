//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Metanoia domain.

mod errors;
mod ids;
mod intensity;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EmotionRecordId, UserId};
pub use intensity::Intensity;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
