use super::*;

#[test]
fn auth_endpoint_joins_base_and_path() {
    assert_eq!(auth_endpoint("http://localhost:8000", "me"), "http://localhost:8000/api/v1/auth/me");
    assert_eq!(
        auth_endpoint("https://api.fillflow.app/", "/logout-all"),
        "https://api.fillflow.app/api/v1/auth/logout-all"
    );
}

#[test]
fn http_auth_api_endpoint_uses_configured_base() {
    let api = HttpAuthApi::new("https://auth.example.com");
    assert_eq!(api.endpoint("refresh"), "https://auth.example.com/api/v1/auth/refresh");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn api_error_detail_only_for_status_errors() {
    let status = ApiError::Status { status: 401, detail: Some("Incorrect password".to_owned()) };
    assert_eq!(status.detail(), Some("Incorrect password"));
    assert_eq!(ApiError::Network("offline".to_owned()).detail(), None);
    assert_eq!(ApiError::Unavailable.detail(), None);
}

#[test]
fn api_error_display_mentions_status() {
    let err = ApiError::Status { status: 503, detail: None };
    assert_eq!(err.to_string(), "request failed with status 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_auth_api_is_unavailable() {
    let api = HttpAuthApi::new("http://localhost:8000");
    let result = futures::executor::block_on(api.current_user(Some("t")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_waitlist_submit_is_unavailable() {
    let result = futures::executor::block_on(submit_waitlist("/api/waitlist", "a@b.com"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
