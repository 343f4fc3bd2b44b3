//! GetEmotionStatsHandler - Query handler for a user's statistics snapshot.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::emotion::EmotionError;
use crate::domain::foundation::UserId;
use crate::domain::stats::EmotionStats;
use crate::ports::EmotionRepository;

/// Query for statistics anchored on `today`.
#[derive(Debug, Clone)]
pub struct GetEmotionStatsQuery {
    pub user_id: UserId,
    pub today: NaiveDate,
}

/// Handler that aggregates a user's full history.
pub struct GetEmotionStatsHandler {
    repository: Arc<dyn EmotionRepository>,
}

impl GetEmotionStatsHandler {
    pub fn new(repository: Arc<dyn EmotionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetEmotionStatsQuery) -> Result<EmotionStats, EmotionError> {
        let records = self.repository.list_by_user(&query.user_id, None).await?;
        let stats = EmotionStats::compute(&records, query.today);

        tracing::debug!(
            user_id = %query.user_id,
            total = stats.total,
            reference_date = %query.today,
            "Computed emotion stats"
        );

        Ok(stats)
    }
}
