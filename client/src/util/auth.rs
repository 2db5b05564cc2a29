//! Route-guard decisions shared by protected routes and the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page must agree on how the return
//! destination travels through `/login?redirect=...`, so both sides of that
//! round trip live here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use url::form_urlencoded;

use crate::state::auth::AuthState;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the post-login destination.
pub const REDIRECT_PARAM: &str = "redirect";

/// What a protected route should render for the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running; show a neutral placeholder.
    Pending,
    /// Render the protected content.
    Allow,
    /// Navigate to this login URL, replacing the history entry.
    Redirect(String),
}

/// Decide how a protected route at `requested_path` responds to `state`.
pub fn guard_decision(state: &AuthState, requested_path: &str) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(login_redirect_path(requested_path))
    }
}

/// Login URL that returns to `requested_path` after authenticating.
pub fn login_redirect_path(requested_path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(requested_path.as_bytes()).collect();
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
}

/// Where to go after login, given the login page's query string.
///
/// Only same-site absolute paths are honored; anything else (missing, empty,
/// protocol-relative, or a full URL) falls back to `/`.
pub fn post_login_destination(query: Option<&str>) -> String {
    query
        .map(|q| q.trim_start_matches('?'))
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == REDIRECT_PARAM)
                .map(|(_, value)| value.into_owned())
        })
        .filter(|dest| is_local_path(dest))
        .unwrap_or_else(|| "/".to_owned())
}

fn is_local_path(dest: &str) -> bool {
    dest.starts_with('/') && !dest.starts_with("//") && !dest.contains('\\')
}
