//! OpenAPI document generation via utoipa derive macros.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::routes;
use crate::state::AppState;

/// The generated OpenAPI 3 document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cnpja-api",
        description = "Validate, format, and generate Brazilian alphanumeric CNPJ identifiers."
    ),
    paths(routes::cnpj::validate, routes::cnpj::generate),
    components(schemas(
        routes::cnpj::CnpjRequest,
        routes::cnpj::CnpjResponse,
        ErrorBody,
        ErrorDetail,
    )),
    tags((name = "cnpj", description = "Identifier validation and generation"))
)]
pub struct ApiDoc;

/// Router serving the document at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve))
}

async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
