//! Statistics over a user's emotion history.
//!
//! Pure domain services: no state, no I/O. Callers load the record set from
//! the store and pass the reference day explicitly.

mod aggregator;
mod summary;
mod window;

pub use aggregator::{
    EmotionAggregator, KindCounts, DEFAULT_CONSISTENCY_WINDOW_DAYS, NO_DOMINANT_KIND,
};
pub use summary::EmotionStats;
pub use window::DateWindow;
