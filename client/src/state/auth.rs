//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session store (`state::session`) and read by route
//! guards, the header, and the dashboard through an `RwSignal<AuthState>`
//! provided via context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Current user, access token, and whether the initial restore is running.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State the app starts in, before the stored session is checked.
    pub fn bootstrapping() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Both a token and a user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Name to greet the user with: display name, else email.
    pub fn greeting_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        Some(user.display_name().unwrap_or(&user.email))
    }
}
