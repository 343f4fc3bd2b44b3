//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EmotionRepository` - The record store for emotion entries
//! - `UserRepository` - Registered users and their profiles

mod emotion_repository;
mod user_repository;

pub use emotion_repository::EmotionRepository;
pub use user_repository::UserRepository;
