//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `METANOIA` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use metanoia::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL settings; `None` runs on the in-memory store
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present, then every `METANOIA__*` variable:
    ///
    /// - `METANOIA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `METANOIA__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("METANOIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// True when a database section is configured.
    pub fn uses_database(&self) -> bool {
        self.database.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "METANOIA__DATABASE__URL",
        "METANOIA__DATABASE__MAX_CONNECTIONS",
        "METANOIA__SERVER__PORT",
        "METANOIA__SERVER__ENVIRONMENT",
        "METANOIA__SERVER__REQUEST_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_without_database() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(!config.uses_database());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_database_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("METANOIA__DATABASE__URL", "postgresql://test@localhost/metanoia");
        env::set_var("METANOIA__DATABASE__MAX_CONNECTIONS", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/metanoia");
        assert_eq!(database.max_connections, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_overrides_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("METANOIA__SERVER__PORT", "8081");
        env::set_var("METANOIA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(config.is_production());
    }

    #[test]
    fn invalid_database_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("METANOIA__DATABASE__URL", "mysql://localhost/metanoia");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn out_of_range_timeout_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("METANOIA__SERVER__REQUEST_TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_err());
    }
}
