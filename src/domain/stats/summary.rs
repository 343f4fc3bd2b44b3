//! Per-user statistics snapshot shown on the stats and profile views.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::emotion::{EmotionKind, EmotionRecord};
use crate::domain::foundation::Percentage;

use super::{DateWindow, EmotionAggregator, KindCounts, DEFAULT_CONSISTENCY_WINDOW_DAYS};

/// Derived statistics over one user's full record set.
///
/// Always recomputed from scratch; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionStats {
    /// Day the windows were anchored on.
    pub reference_date: NaiveDate,
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub by_kind: KindCounts,
    pub most_frequent: Option<EmotionKind>,
    /// Entries of kind `happy` across the whole history.
    pub happy_entries: usize,
    pub consistency: Percentage,
    pub current_streak: u32,
}

impl EmotionStats {
    /// Compute every statistic for `records` as of `today`.
    pub fn compute(records: &[EmotionRecord], today: NaiveDate) -> Self {
        let by_kind = EmotionAggregator::count_by_kind(records);
        let most_frequent = EmotionAggregator::dominant(&by_kind);
        let happy_entries = by_kind.get(EmotionKind::Happy);

        Self {
            reference_date: today,
            total: records.len(),
            today: EmotionAggregator::filter_by_window(records, &DateWindow::today(today)).len(),
            this_week: EmotionAggregator::filter_by_window(records, &DateWindow::this_week(today))
                .len(),
            this_month: EmotionAggregator::filter_by_window(
                records,
                &DateWindow::this_month(today),
            )
            .len(),
            by_kind,
            most_frequent,
            happy_entries,
            consistency: EmotionAggregator::consistency_score(
                records,
                today,
                DEFAULT_CONSISTENCY_WINDOW_DAYS,
            ),
            current_streak: EmotionAggregator::current_streak(records, today),
        }
    }

    /// True when there is nothing to aggregate.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
