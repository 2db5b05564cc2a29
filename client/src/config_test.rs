use super::*;

#[test]
fn normalize_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url(None, DEFAULT_API_URL), "http://localhost:8000");
    assert_eq!(normalize_base_url(Some("   "), DEFAULT_WAITLIST_URL), "/api/waitlist");
}

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(
        normalize_base_url(Some("https://api.fillflow.app/"), DEFAULT_API_URL),
        "https://api.fillflow.app"
    );
    assert_eq!(normalize_base_url(Some(" https://x.dev// "), DEFAULT_API_URL), "https://x.dev");
}

#[test]
fn configured_urls_never_end_with_slash() {
    assert!(!api_base_url().ends_with('/'));
    assert!(!waitlist_url().ends_with('/'));
}
