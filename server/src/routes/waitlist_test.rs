use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::routes::api_routes;
use crate::state::test_helpers::{failing_app_state, test_app_state};

async fn post_waitlist(state: AppState, body: &'static str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/waitlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = api_routes(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// VALIDATION
// =============================================================================

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (state, _) = test_app_state();
    let (status, body) = post_waitlist(state, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"success": false, "message": "Invalid JSON in request body"}));
}

#[tokio::test]
async fn missing_email_is_bad_request() {
    for payload in ["", "{}", r#"{"email":"   "}"#] {
        let (state, _) = test_app_state();
        let (status, body) = post_waitlist(state, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
        assert_eq!(body["message"], "Email address is required");
    }
}

#[tokio::test]
async fn malformed_address_is_bad_request() {
    for payload in [r#"{"email":"nobody"}"#, r#"{"email":"a@localhost"}"#, r#"{"email":7}"#] {
        let (state, store) = test_app_state();
        let (status, body) = post_waitlist(state, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
        assert_eq!(body["message"], "Invalid email address format");
        assert_eq!(store.count().await, 0);
    }
}

// =============================================================================
// STORAGE
// =============================================================================

#[tokio::test]
async fn valid_signup_stores_normalized_email() {
    let (state, store) = test_app_state();
    let (status, body) = post_waitlist(state, r#"{"email":"  Ada@Example.com "}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"success": true, "message": "Successfully added to waitlist!"}));

    let entry = store.get("ada@example.com").await.unwrap().unwrap();
    assert_eq!(entry.source, "coming-soon-page");
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let (status, body) = post_waitlist(failing_app_state(), r#"{"email":"ada@example.com"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"success": false, "message": "Internal server error"}));
}

// =============================================================================
// CORS / HEALTH
// =============================================================================

#[tokio::test]
async fn preflight_allows_post_from_any_origin() {
    let (state, _) = test_app_state();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/waitlist")
        .header(header::ORIGIN, "https://fillflow.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = api_routes(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (state, _) = test_app_state();
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
