//! # cnpja-api entry point
//!
//! Reads configuration from the environment, connects to Postgres when
//! `DATABASE_URL` is set, and serves the router from [`cnpja_api::app`].

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cnpja_api::db;
use cnpja_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let db_pool = match db::init_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("database initialization failed: {e}");
            return ExitCode::from(1);
        }
    };

    let state = AppState::with_config(config.clone(), db_pool);
    let app = cnpja_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {addr}: {e}");
            return ExitCode::from(1);
        }
    };

    tracing::info!("listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
