//! DeleteEmotionHandler - Command handler for removing one entry.

use std::sync::Arc;

use crate::domain::emotion::EmotionError;
use crate::domain::foundation::{EmotionRecordId, UserId};
use crate::ports::EmotionRepository;

/// Command to delete an entry on behalf of its owner.
#[derive(Debug, Clone)]
pub struct DeleteEmotionCommand {
    pub user_id: UserId,
    pub record_id: EmotionRecordId,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteEmotionResult {
    Deleted,
    /// The id did not exist; nothing changed.
    AlreadyAbsent,
}

/// Handler for deleting emotion entries.
///
/// Deleting an absent id succeeds without effect. Deleting another user's
/// entry is refused.
pub struct DeleteEmotionHandler {
    repository: Arc<dyn EmotionRepository>,
}

impl DeleteEmotionHandler {
    pub fn new(repository: Arc<dyn EmotionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteEmotionCommand) -> Result<DeleteEmotionResult, EmotionError> {
        // 1. Load and authorize
        let Some(record) = self.repository.find_by_id(&cmd.record_id).await? else {
            tracing::debug!(record_id = %cmd.record_id, "Delete requested for absent emotion record");
            return Ok(DeleteEmotionResult::AlreadyAbsent);
        };

        if !record.is_owned_by(&cmd.user_id) {
            tracing::warn!(
                record_id = %cmd.record_id,
                user_id = %cmd.user_id,
                "Refused to delete emotion record owned by another user"
            );
            return Err(EmotionError::forbidden());
        }

        // 2. Delete
        if self.repository.delete(&cmd.record_id).await? {
            tracing::info!(record_id = %cmd.record_id, user_id = %cmd.user_id, "Emotion deleted");
            Ok(DeleteEmotionResult::Deleted)
        } else {
            tracing::debug!(record_id = %cmd.record_id, "Emotion record vanished before delete");
            Ok(DeleteEmotionResult::AlreadyAbsent)
        }
    }
}
