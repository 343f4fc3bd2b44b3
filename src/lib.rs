//! Metanoia - Mood tracking backend
//!
//! Users log discrete emotions with an intensity and an optional note, browse
//! their history and read statistics derived from it (counts per kind, time
//! windows, most frequent emotion, consistency and streaks).
//!
//! Layout follows hexagonal architecture:
//! - `domain` - value objects, entities and pure aggregation
//! - `ports` - repository traits
//! - `adapters` - PostgreSQL, in-memory and HTTP implementations
//! - `application` - command and query handlers
//! - `config` - typed configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
