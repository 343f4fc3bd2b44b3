//! LogEmotionHandler - Command handler for recording a new emotion entry.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::emotion::{EmotionError, EmotionKind, EmotionRecord, NewEmotionRecord};
use crate::domain::foundation::{Intensity, UserId};
use crate::ports::EmotionRepository;

/// Command to log one emotion entry.
///
/// Fields arrive unvalidated from the boundary; the handler turns them into
/// domain types and rejects anything malformed before touching the store.
#[derive(Debug, Clone)]
pub struct LogEmotionCommand {
    pub user_id: String,
    pub emotion: String,
    pub intensity: Option<i64>,
    pub note: Option<String>,
    /// Day the entry is attributed to; `None` means "today".
    pub date: Option<NaiveDate>,
}

/// Handler for logging emotions.
pub struct LogEmotionHandler {
    repository: Arc<dyn EmotionRepository>,
}

impl LogEmotionHandler {
    pub fn new(repository: Arc<dyn EmotionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: LogEmotionCommand,
        today: NaiveDate,
    ) -> Result<EmotionRecord, EmotionError> {
        // 1. Validate input
        let user_id = UserId::new(cmd.user_id)?;
        let kind: EmotionKind = cmd.emotion.parse()?;
        let intensity = match cmd.intensity {
            Some(value) => Intensity::try_new(value)?,
            None => Intensity::default(),
        };
        let new = NewEmotionRecord::new(
            user_id,
            kind,
            intensity,
            cmd.note,
            cmd.date.unwrap_or(today),
        );

        // 2. Persist
        let record = self.repository.create(new).await?;

        tracing::info!(
            record_id = %record.id(),
            user_id = %record.user_id(),
            emotion = %record.kind(),
            intensity = record.intensity().value(),
            "Emotion logged"
        );

        Ok(record)
    }
}
