//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read server env at runtime, so endpoint roots are
//! baked in at compile time via `FILLFLOW_API_URL` / `FILLFLOW_WAITLIST_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Auth API root used when `FILLFLOW_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Waitlist endpoint used when `FILLFLOW_WAITLIST_URL` is not set at build time.
pub const DEFAULT_WAITLIST_URL: &str = "/api/waitlist";

/// Base URL of the external auth API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("FILLFLOW_API_URL"), DEFAULT_API_URL)
}

/// Full URL the waitlist form posts to.
pub fn waitlist_url() -> String {
    normalize_base_url(option_env!("FILLFLOW_WAITLIST_URL"), DEFAULT_WAITLIST_URL)
}

fn normalize_base_url(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}
