//! Adapters - Implementations of ports for external systems.
//!
//! - `http` - axum REST API
//! - `memory` - In-memory stores for tests and database-less runs
//! - `postgres` - PostgreSQL-backed stores

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryEmotionRepository, InMemoryUserRepository};
pub use postgres::{PostgresEmotionRepository, PostgresUserRepository};
