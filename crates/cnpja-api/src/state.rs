//! Shared application state and environment-driven configuration.

use sqlx::postgres::PgPool;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server listens on (`CNPJA_PORT`).
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = std::env::var("CNPJA_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| {
                let default = Self::default().port;
                tracing::debug!("CNPJA_PORT not set, using {default}");
                default
            });
        Self { port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 4400 }
    }
}

/// State shared by all request handlers.
///
/// The database pool is optional: without `DATABASE_URL` the service runs
/// without persistence: generated identifiers are not recorded and not
/// uniqueness-checked.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Default configuration, no database. Used by tests.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    pub fn with_config(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        Self { config, db_pool }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
