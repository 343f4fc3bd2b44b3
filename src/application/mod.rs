//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (log, delete, register, update) are separated from queries
//! (list, stats, get).

pub mod handlers;

pub use handlers::*;
