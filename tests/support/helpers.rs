// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use hire_matrix_core::application::ports::time::Clock;
use hire_matrix_core::application::services::ApplicationServices;
use hire_matrix_core::config::AppConfig;
use hire_matrix_core::infrastructure::time::FixedClock;
use hire_matrix_core::presentation::http::{routes::build_router, state::HttpState};
use hire_matrix_core::startup;
use serde_json::Value;

use super::fixtures;

pub fn build_test_services() -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixtures::fixed_now()));
    let services = startup::build_services_from(
        fixtures::embedded_vocabulary(),
        &AppConfig::default(),
        clock,
    )
    .expect("embedded vocabulary passes the audit");
    Arc::new(services)
}

pub fn make_test_router() -> axum::Router {
    let state = HttpState {
        services: build_test_services(),
    };
    build_router(state, &[])
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_body(resp: Response) -> (axum::http::response::Parts, Vec<u8>) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 4 * 1024 * 1024)
        .await
        .expect("read body");
    (parts, bytes.to_vec())
}

/// Assert a 200 JSON response and return the parsed body.
pub async fn expect_json(resp: Response) -> Value {
    let status = resp.status();
    let (parts, bytes) = read_body(resp).await;
    if status != StatusCode::OK {
        panic!("expected 200 OK, got {}: {}", status, String::from_utf8_lossy(&bytes));
    }
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, bytes) = read_body(resp).await;
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
