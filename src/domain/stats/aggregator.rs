//! Emotion Aggregator - counts, dominant kind, window filters, consistency and streaks.
//!
//! Every function here is pure. The reference day is always passed in by the
//! caller so results never depend on the wall clock.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::emotion::{EmotionKind, EmotionRecord};
use crate::domain::foundation::{Intensity, Percentage};

use super::DateWindow;

/// Label reported when there is no dominant kind.
pub const NO_DOMINANT_KIND: &str = "none";

/// Window length used by the consistency score unless told otherwise.
pub const DEFAULT_CONSISTENCY_WINDOW_DAYS: u32 = 7;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Tally of records per kind, kept in the order each kind was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCounts {
    entries: Vec<(EmotionKind, usize)>,
}

impl KindCounts {
    fn increment(&mut self, kind: EmotionKind) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((kind, 1)),
        }
    }

    /// Count for `kind`, zero if never seen.
    pub fn get(&self, kind: EmotionKind) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Kinds and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionKind, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KindCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, count) in &self.entries {
            map.serialize_entry(kind.as_str(), count)?;
        }
        map.end()
    }
}

/// Stateless aggregation over a user's records.
pub struct EmotionAggregator;

impl EmotionAggregator {
    /// Counts records by kind. Empty input gives an empty mapping.
    pub fn count_by_kind<'a, I>(records: I) -> KindCounts
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        let mut counts = KindCounts::default();
        for record in records {
            counts.increment(record.kind());
        }
        counts
    }

    /// The kind with the highest count.
    ///
    /// Ties go to the kind that reached the list first in record order.
    /// Returns `None` for an empty input.
    pub fn most_frequent_kind<'a, I>(records: I) -> Option<EmotionKind>
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        Self::dominant(&Self::count_by_kind(records))
    }

    /// Dominant kind of an already computed tally, same tie-break as
    /// [`EmotionAggregator::most_frequent_kind`].
    pub fn dominant(counts: &KindCounts) -> Option<EmotionKind> {
        let mut best: Option<(EmotionKind, usize)> = None;
        for (kind, count) in counts.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((kind, count)),
            }
        }
        best.map(|(kind, _)| kind)
    }

    /// Label of the dominant kind, or [`NO_DOMINANT_KIND`].
    pub fn most_frequent_label<'a, I>(records: I) -> &'static str
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        Self::most_frequent_kind(records)
            .map(|kind| kind.as_str())
            .unwrap_or(NO_DOMINANT_KIND)
    }

    /// Records whose date falls inside `window`, order preserved.
    pub fn filter_by_window<'a, I>(records: I, window: &DateWindow) -> Vec<&'a EmotionRecord>
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        records
            .into_iter()
            .filter(|record| window.contains(record.date()))
            .collect()
    }

    /// `min(100, round(100 * n / window_days))` where `n` is the number of
    /// records dated within the last `window_days` days ending at `today`.
    ///
    /// Zero when there are no records or the window is empty.
    pub fn consistency_score<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Percentage
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        let window = DateWindow::last_days(today, window_days);
        let in_window = Self::filter_by_window(records, &window).len();
        Percentage::of_ratio(in_window, window_days as usize)
    }

    /// Consecutive days ending at `today` with at least one entry.
    ///
    /// Zero when nothing was logged today.
    pub fn current_streak<'a, I>(records: I, today: NaiveDate) -> u32
    where
        I: IntoIterator<Item = &'a EmotionRecord>,
    {
        let logged: HashSet<NaiveDate> = records.into_iter().map(|r| r.date()).collect();
        let mut streak = 0;
        let mut day = Some(today);
        while let Some(d) = day.filter(|d| logged.contains(d)) {
            streak += 1;
            day = d.pred_opt();
        }
        streak
    }

    /// `intensity` filled stars followed by the remaining empty stars; always ten glyphs.
    pub fn intensity_stars(intensity: Intensity) -> String {
        let filled = intensity.value() as usize;
        let empty = Intensity::MAX as usize - filled;
        std::iter::repeat(FILLED_STAR)
            .take(filled)
            .chain(std::iter::repeat(EMPTY_STAR).take(empty))
            .collect()
    }
}
