//! Integration tests for the index route and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, FakeSource};

// ---------------------------------------------------------------------------
// Test: GET / returns the fixed greeting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_returns_fixed_message() {
    let safelist = common::safelist_file(&[]);
    let app = common::build_test_app(
        Arc::new(FakeSource::new(Vec::new())),
        safelist.path().to_path_buf(),
    );

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "nothing to see here");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let safelist = common::safelist_file(&[]);
    let app = common::build_test_app(
        Arc::new(FakeSource::new(Vec::new())),
        safelist.path().to_path_buf(),
    );

    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let safelist = common::safelist_file(&[]);
    let app = common::build_test_app(
        Arc::new(FakeSource::new(Vec::new())),
        safelist.path().to_path_buf(),
    );

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
