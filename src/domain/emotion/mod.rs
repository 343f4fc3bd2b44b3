//! Emotion journal domain module.
//!
//! A user logs discrete emotion entries, each with a kind from a closed set,
//! an intensity from 1 to 10, an optional note and the calendar day it
//! belongs to. Entries are never edited in place.

mod errors;
mod kind;
mod record;

pub use errors::EmotionError;
pub use kind::EmotionKind;
pub use record::{EmotionRecord, NewEmotionRecord};
