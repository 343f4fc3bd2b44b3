//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `emotion` - Emotion records and their validation
//! - `stats` - Pure aggregation over a user's emotion history
//! - `profile` - User profiles and personal goals

pub mod emotion;
pub mod foundation;
pub mod profile;
pub mod stats;
