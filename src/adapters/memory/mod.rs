//! In-memory adapters for tests and database-less development runs.

mod emotion_repository;
mod user_repository;

pub use emotion_repository::InMemoryEmotionRepository;
pub use user_repository::InMemoryUserRepository;
