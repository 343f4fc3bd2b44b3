//! Metanoia HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use metanoia::adapters::http::api_router;
use metanoia::adapters::memory::{InMemoryEmotionRepository, InMemoryUserRepository};
use metanoia::adapters::postgres::{
    self, PostgresEmotionRepository, PostgresUserRepository,
};
use metanoia::config::AppConfig;
use metanoia::ports::{EmotionRepository, UserRepository};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    init_tracing(&config);

    let (emotions, users) = build_stores(&config).await;
    let app = api_router(emotions, users, &config.server);

    let address = config
        .server
        .socket_addr()
        .expect("Invalid socket address");
    let listener = TcpListener::bind(address)
        .await
        .expect("Failed to bind listener");
    info!(%address, environment = ?config.server.environment, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server stopped");
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn build_stores(
    config: &AppConfig,
) -> (Arc<dyn EmotionRepository>, Arc<dyn UserRepository>) {
    let Some(database) = &config.database else {
        warn!("No database configured; data is kept in memory and lost on restart");
        return (
            Arc::new(InMemoryEmotionRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        );
    };

    let pool = postgres::connect(database)
        .await
        .expect("Failed to connect to PostgreSQL");
    info!(
        database = %database.redacted_url(),
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        postgres::run_migrations(&pool)
            .await
            .expect("Failed to apply migrations");
        info!("Migrations applied");
    }

    (
        Arc::new(PostgresEmotionRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool)),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
