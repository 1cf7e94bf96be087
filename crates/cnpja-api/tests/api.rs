//! # Integration tests for cnpja-api
//!
//! Exercises the assembled router with in-process requests: health probes,
//! validation verdicts for masked/unmasked/invalid input, database-free
//! generation, and the OpenAPI document. Database-backed generation paths
//! need a live Postgres and are covered by the unit tests around the
//! retry logic instead.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cnpja_api::state::AppState;

/// Helper: build the test app with no database.
fn test_app() -> axum::Router {
    cnpja_api::app(AppState::new())
}

/// Helper: read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn validate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/cnpj/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// -- Health probes ----------------------------------------------------------

#[tokio::test]
async fn liveness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_probe_without_database() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Validate ---------------------------------------------------------------

#[tokio::test]
async fn validate_masked_valid_identifier() {
    let response = test_app()
        .oneshot(validate_request(r#"{"cnpj":"12.ABC.345/01DE-35"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["cnpj"], "12.ABC.345/01DE-35");
    assert_eq!(body["formatted"], "12.ABC.345/01DE-35");
    assert_eq!(body["check_digits"], "35");
}

#[tokio::test]
async fn validate_unmasked_numeric_identifier() {
    let response = test_app()
        .oneshot(validate_request(r#"{"cnpj":"00000000000191"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["formatted"], "00.000.000/0001-91");
}

#[tokio::test]
async fn validate_rejects_all_zero_identifier() {
    let response = test_app()
        .oneshot(validate_request(r#"{"cnpj":"00.000.000/0000-00"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert!(body.get("check_digits").is_none());
}

#[tokio::test]
async fn validate_rejects_lowercase() {
    let response = test_app()
        .oneshot(validate_request(r#"{"cnpj":"12.abc.345/01de-35"}"#))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn validate_reports_sentinel_for_unformattable_input() {
    let response = test_app()
        .oneshot(validate_request(r#"{"cnpj":"nope"}"#))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["formatted"], "invalid identifier");
}

#[tokio::test]
async fn validate_malformed_json_is_422_with_error_body() {
    let response = test_app()
        .oneshot(validate_request("{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn validate_missing_field_is_422() {
    let response = test_app()
        .oneshot(validate_request(r#"{"value":"12ABC34501DE35"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- Generate ---------------------------------------------------------------

#[tokio::test]
async fn generate_without_database_returns_valid_identifier() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/cnpj/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], true);

    let cnpj = body["cnpj"].as_str().unwrap();
    assert_eq!(cnpj.len(), 14);
    assert!(cnpja_core::is_valid(cnpj));

    let formatted = body["formatted"].as_str().unwrap();
    assert_eq!(formatted, cnpja_core::format(cnpj));

    let digits = body["check_digits"].as_str().unwrap();
    assert_eq!(digits, &cnpj[12..]);
}

#[tokio::test]
async fn generate_produces_distinct_values_across_calls() {
    // Collisions are possible by design but astronomically unlikely over
    // a 36^12 space; two draws agreeing almost certainly means the RNG is
    // not being consulted.
    let a = body_json(
        test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/cnpj/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    let b = body_json(
        test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/cnpj/generate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    assert_ne!(a["cnpj"], b["cnpj"]);
}

// -- OpenAPI ----------------------------------------------------------------

#[tokio::test]
async fn openapi_document_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/cnpj/validate"].is_object());
    assert!(body["paths"]["/api/cnpj/generate"].is_object());
}
