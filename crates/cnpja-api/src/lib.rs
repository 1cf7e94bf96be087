//! # cnpja-api — HTTP service for the alphanumeric CNPJ toolkit
//!
//! Thin JSON layer over [`cnpja_core`]. Validation and formatting are pure
//! pass-throughs; generation optionally coordinates with a Postgres
//! uniqueness store (retry-until-unique with a bounded attempt count).
//!
//! ## API Surface
//!
//! | Route                      | Module            | Behavior              |
//! |----------------------------|-------------------|-----------------------|
//! | `POST /api/cnpj/validate`  | [`routes::cnpj`]  | Checksum validation   |
//! | `GET /api/cnpj/generate`   | [`routes::cnpj`]  | Random generation     |
//! | `GET /health/liveness`     | here              | Process up            |
//! | `GET /health/readiness`    | here              | DB reachable (if any) |
//! | `GET /openapi.json`        | [`openapi`]       | Generated spec        |

pub mod db;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes stay outside the traced API router so probe traffic does
/// not flood the request log.
pub fn app(state: AppState) -> Router {
    let api = routes::cnpj::router()
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the service can do useful work.
///
/// Without a configured database there is nothing external to check; with
/// one, an unreachable database means generation cannot honor its
/// uniqueness contract, so the probe answers 503.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(pool) = &state.db_pool {
        if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
            tracing::warn!("Database health check failed: {e}");
            return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
        }
    }
    (StatusCode::OK, "ready").into_response()
}
