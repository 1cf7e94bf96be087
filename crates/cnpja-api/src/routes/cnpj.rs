//! # CNPJ Routes
//!
//! The two JSON endpoints of the service:
//!
//! - `POST /api/cnpj/validate` — checksum-validate a raw identifier.
//! - `GET /api/cnpj/generate` — generate a valid identifier; with a
//!   database configured, retry against the uniqueness store and persist.
//!
//! Core error identities never cross the HTTP boundary; responses carry a
//! validity boolean and message strings only.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

use cnpja_core::{format, Cnpj};

use crate::db;
use crate::error::AppError;
use crate::state::AppState;

/// Attempt bound when drawing against the uniqueness store.
const MAX_GENERATE_ATTEMPTS: u32 = 100;

/// Build the CNPJ router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cnpj/validate", post(validate))
        .route("/api/cnpj/generate", get(generate))
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request to validate a raw identifier.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CnpjRequest {
    /// Raw identifier, masked or unmasked.
    pub cnpj: String,
}

/// Validation / generation result.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CnpjResponse {
    /// The value as received (validate) or as generated, canonical form.
    pub cnpj: String,
    /// Masked display form, or the invalid sentinel when unformattable.
    pub formatted: String,
    /// Whether the value passes checksum validation.
    pub valid: bool,
    /// Check-digit suffix, present only for valid identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digits: Option<String>,
}

impl CnpjResponse {
    /// Evaluate a raw input value.
    fn evaluate(value: String) -> Self {
        let formatted = format(&value);
        match Cnpj::new(&value) {
            Ok(cnpj) => Self {
                cnpj: value,
                formatted,
                valid: true,
                check_digits: Some(cnpj.check_digits().to_string()),
            },
            Err(_) => Self {
                cnpj: value,
                formatted,
                valid: false,
                check_digits: None,
            },
        }
    }

    /// Response for a freshly generated identifier.
    fn generated(cnpj: Cnpj) -> Self {
        Self {
            formatted: cnpj.formatted(),
            valid: true,
            check_digits: Some(cnpj.check_digits().to_string()),
            cnpj: cnpj.as_str().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/cnpj/validate — validate a raw identifier.
///
/// Always 200 for well-formed requests; the verdict is the `valid` field.
/// Malformed JSON is a 422 with an error body.
#[utoipa::path(
    post,
    path = "/api/cnpj/validate",
    request_body = CnpjRequest,
    responses(
        (status = 200, description = "Validation result", body = CnpjResponse),
        (status = 422, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "cnpj",
)]
pub async fn validate(
    payload: Result<Json<CnpjRequest>, JsonRejection>,
) -> Result<Json<CnpjResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(CnpjResponse::evaluate(req.cnpj)))
}

/// GET /api/cnpj/generate — generate a valid identifier.
///
/// With a database configured, draws until the value is absent from the
/// uniqueness store (bounded attempts), persists it, and answers 409 when
/// the bound is exhausted. Without a database, a single draw is returned
/// as-is.
#[utoipa::path(
    get,
    path = "/api/cnpj/generate",
    responses(
        (status = 200, description = "Generated identifier", body = CnpjResponse),
        (status = 409, description = "No unique value found within the attempt bound", body = crate::error::ErrorBody),
    ),
    tag = "cnpj",
)]
pub async fn generate(State(state): State<AppState>) -> Result<Json<CnpjResponse>, AppError> {
    let cnpj = match &state.db_pool {
        Some(pool) => generate_unique(pool).await?,
        None => Cnpj::generate(),
    };
    Ok(Json(CnpjResponse::generated(cnpj)))
}

/// Draw identifiers until one is absent from the uniqueness store, then
/// record it. The INSERT is the authoritative check: a concurrent writer
/// losing the race surfaces as a unique violation and counts as a
/// collision, not an error.
async fn generate_unique(pool: &PgPool) -> Result<Cnpj, AppError> {
    for attempt in 1..=MAX_GENERATE_ATTEMPTS {
        let candidate = Cnpj::generate();

        if db::cnpjs::exists(pool, candidate.as_str()).await? {
            tracing::debug!(attempt, "generated identifier already recorded, redrawing");
            continue;
        }

        match db::cnpjs::insert(pool, candidate.as_str()).await {
            Ok(()) => return Ok(candidate),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(attempt, "lost insert race, redrawing");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::Conflict(format!(
        "could not generate a unique CNPJ after {MAX_GENERATE_ATTEMPTS} attempts"
    )))
}

/// Postgres unique-violation, SQLSTATE 23505.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
