//! HTTP DTOs for emotion endpoints.
//!
//! Field names are camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::emotion::EmotionRecord;
use crate::domain::stats::{EmotionAggregator, EmotionStats, KindCounts, NO_DOMINANT_KIND};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to log an emotion.
///
/// Required fields are optional here so that a missing one is reported as a
/// validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEmotionRequest {
    pub user_id: Option<String>,
    pub emotion: Option<String>,
    pub note: Option<String>,
    pub intensity: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Query parameters for listing history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmotionsParams {
    pub kind: Option<String>,
}

/// Query parameters for statistics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsParams {
    pub today: Option<NaiveDate>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One stored entry as shown in history views.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionResponse {
    pub id: String,
    pub user_id: String,
    pub emotion: String,
    pub label: String,
    pub intensity: u8,
    /// Ten-character star bar for the intensity.
    pub stars: String,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub created_at: String,
}

impl From<&EmotionRecord> for EmotionResponse {
    fn from(record: &EmotionRecord) -> Self {
        Self {
            id: record.id().to_string(),
            user_id: record.user_id().to_string(),
            emotion: record.kind().as_str().to_string(),
            label: record.kind().label().to_string(),
            intensity: record.intensity().value(),
            stars: EmotionAggregator::intensity_stars(record.intensity()),
            note: record.note().map(str::to_string),
            date: record.date(),
            created_at: record.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Statistics snapshot; `mostFrequent` is `"none"` when there are no entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionStatsResponse {
    pub reference_date: NaiveDate,
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub by_kind: KindCounts,
    pub most_frequent: String,
    pub happy_entries: usize,
    pub consistency: u8,
    pub current_streak: u32,
}

impl From<EmotionStats> for EmotionStatsResponse {
    fn from(stats: EmotionStats) -> Self {
        Self {
            reference_date: stats.reference_date,
            total: stats.total,
            today: stats.today,
            this_week: stats.this_week,
            this_month: stats.this_month,
            most_frequent: stats
                .most_frequent
                .map(|k| k.as_str().to_string())
                .unwrap_or_else(|| NO_DOMINANT_KIND.to_string()),
            by_kind: stats.by_kind,
            happy_entries: stats.happy_entries,
            consistency: stats.consistency.value(),
            current_streak: stats.current_streak,
        }
    }
}
