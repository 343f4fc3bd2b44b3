//! Inclusive calendar-day windows used to slice a user's history.

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

/// Inclusive `[start, end]` range of calendar days.
///
/// A window whose `start` is after its `end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Just the given day.
    pub fn today(today: NaiveDate) -> Self {
        Self::new(today, today)
    }

    /// The last seven days, today included.
    pub fn this_week(today: NaiveDate) -> Self {
        Self::last_days(today, 7)
    }

    /// From the same day one month earlier through today.
    ///
    /// Month subtraction clamps to the end of shorter months, so the window
    /// for March 31 starts on the last day of February.
    pub fn this_month(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    /// The last `days` days ending at `today`; zero days is an empty window.
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        if days == 0 {
            return Self::new(today.succ_opt().unwrap_or(NaiveDate::MAX), today);
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days) - 1))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
