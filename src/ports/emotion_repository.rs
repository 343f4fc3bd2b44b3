//! Emotion repository port (the record store).
//!
//! Defines the contract for persisting and reading emotion records.
//!
//! # Design
//!
//! - **Store assigns identity**: callers hand over a validated
//!   [`NewEmotionRecord`] and get back the stored record with its id
//! - **User-scoped reads**: listing is always by owner
//! - **Insertion order**: `list_by_user` returns records in the order they
//!   were created; display sorting is the caller's concern

use crate::domain::emotion::{EmotionKind, EmotionRecord, NewEmotionRecord};
use crate::domain::foundation::{DomainError, EmotionRecordId, UserId};
use async_trait::async_trait;

/// Repository port for emotion record persistence.
#[async_trait]
pub trait EmotionRepository: Send + Sync {
    /// Store a new record, assigning a fresh unique id.
    ///
    /// Implementations re-validate the record before writing.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the record breaks an invariant
    /// - `StorageUnavailable` on persistence failure
    async fn create(&self, record: NewEmotionRecord) -> Result<EmotionRecord, DomainError>;

    /// All records owned by `user_id`, optionally only those of `kind`.
    ///
    /// Returns records in insertion order.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        kind: Option<EmotionKind>,
    ) -> Result<Vec<EmotionRecord>, DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EmotionRecordId) -> Result<Option<EmotionRecord>, DomainError>;

    /// Permanently remove a record.
    ///
    /// Returns `false` when no record had this id; that is not an error.
    async fn delete(&self, id: &EmotionRecordId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn EmotionRepository) {}
    }
}
