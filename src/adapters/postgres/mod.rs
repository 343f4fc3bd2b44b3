//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresEmotionRepository` - Emotion journal entries
//! - `PostgresUserRepository` - Registered users and profiles
//!
//! Schema lives in `migrations/` and is applied by [`run_migrations`].

mod emotion_repository;
mod user_repository;

pub use emotion_repository::PostgresEmotionRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Open a connection pool sized from `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
