//! Session store: the single writer of [`AuthState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the current auth state plus durable tokens and drives the auth API
//! for restore, login, register, refresh, and logout. The Leptos app mirrors
//! every change into its `RwSignal<AuthState>` through the observer installed
//! by [`provide_browser_session`]. There is exactly one store per app; pages
//! reach it with [`use_browser_session`].
//!
//! INVARIANTS
//! ==========
//! - A token without a user is only ever transient; every operation that
//!   cannot obtain a user clears the token again before returning.
//! - `restore_session` performs at most one refresh attempt.
//! - Failed login/register leave state and storage exactly as they were.
//! - Logout always clears local state, whatever the server says.
//! - A restore or refresh that finishes after a newer sign-in never clears or
//!   overwrites the session that sign-in established.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::api::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::TokenPair;
use crate::util::token_storage::{ACCESS_TOKEN_KEY, LocalTokenStorage, REFRESH_TOKEN_KEY, TokenStorage};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// User-facing failure of a login or registration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials were refused or the call failed; carries the message to show.
    #[error("{0}")]
    Rejected(String),
    /// Tokens were issued but the profile could not be loaded with them.
    #[error("Failed to fetch user")]
    Profile,
}

impl AuthError {
    fn rejected(err: &ApiError, fallback: &str) -> Self {
        Self::Rejected(err.detail().unwrap_or(fallback).to_owned())
    }
}

type Observer = Box<dyn Fn(&AuthState)>;

/// Auth state holder wired to an [`AuthApi`] and a [`TokenStorage`].
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: RefCell<AuthState>,
    observer: Option<Observer>,
    sign_ins: Cell<u64>,
}

/// Store used by the running app.
pub type BrowserSession = SessionStore<HttpAuthApi, LocalTokenStorage>;

/// Context handle for the app's single [`BrowserSession`].
pub type SharedSession = StoredValue<Rc<BrowserSession>, LocalStorage>;

/// Create the app's session store from `auth` and put it in context.
///
/// The store writes every change back into `auth`.
pub fn provide_browser_session(auth: RwSignal<AuthState>) -> Rc<BrowserSession> {
    let session = Rc::new(
        SessionStore::with_state(HttpAuthApi::from_config(), LocalTokenStorage, auth.get_untracked())
            .observe(move |state| auth.set(state.clone())),
    );
    provide_context::<SharedSession>(StoredValue::new_local(Rc::clone(&session)));
    session
}

/// Handle to the store installed by [`provide_browser_session`].
pub fn use_browser_session() -> SharedSession {
    expect_context::<SharedSession>()
}

impl<A: AuthApi, S: TokenStorage> SessionStore<A, S> {
    /// Store in the bootstrapping state, before `restore_session` runs.
    pub fn new(api: A, storage: S) -> Self {
        Self::with_state(api, storage, AuthState::bootstrapping())
    }

    pub fn with_state(api: A, storage: S, state: AuthState) -> Self {
        Self { api, storage, state: RefCell::new(state), observer: None, sign_ins: Cell::new(0) }
    }

    /// Call `observer` after every state change.
    #[must_use]
    pub fn observe(mut self, observer: impl Fn(&AuthState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let next = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&next);
        }
    }

    fn persist(&self, pair: &TokenPair) {
        self.storage.set(ACCESS_TOKEN_KEY, &pair.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &pair.refresh_token);
    }

    fn clear_session(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.update(|s| {
            s.token = None;
            s.user = None;
        });
    }

    // =========================================================================
    // RESTORE / REFRESH
    // =========================================================================

    /// Validate the stored session on startup.
    ///
    /// Tries the stored access token, then one refresh; if neither yields a
    /// user the stored tokens are removed. Always ends with `loading == false`.
    pub async fn restore_session(&self) {
        let sign_ins = self.sign_ins.get();
        match self.storage.get(ACCESS_TOKEN_KEY) {
            None => self.update(|s| {
                s.token = None;
                s.user = None;
            }),
            Some(token) => {
                self.update(|s| s.token = Some(token.clone()));
                match self.api.current_user(Some(&token)).await {
                    Ok(user) if self.sign_ins.get() == sign_ins => self.update(|s| s.user = Some(user)),
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("session validation failed: {e}");
                        if !self.refresh_token().await && self.sign_ins.get() == sign_ins {
                            self.clear_session();
                        }
                    }
                }
            }
        }
        self.update(|s| s.loading = false);
    }

    /// Exchange the stored refresh token for a new pair and reload the user.
    ///
    /// Returns `false` without any request when no refresh token is stored.
    /// Failures are logged, never raised.
    pub async fn refresh_token(&self) -> bool {
        let sign_ins = self.sign_ins.get();
        let Some(refresh) = self.storage.get(REFRESH_TOKEN_KEY) else {
            return false;
        };
        let pair = match self.api.refresh(&refresh).await {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("token refresh failed: {e}");
                return false;
            }
        };
        if self.sign_ins.get() != sign_ins {
            return false;
        }
        self.persist(&pair);
        self.update(|s| s.token = Some(pair.access_token.clone()));

        match self.api.current_user(Some(&pair.access_token)).await {
            Ok(user) => {
                if self.sign_ins.get() == sign_ins {
                    self.update(|s| s.user = Some(user));
                }
                true
            }
            Err(e) => {
                log::warn!("user fetch after refresh failed: {e}");
                if self.sign_ins.get() != sign_ins {
                    return false;
                }
                self.update(|s| {
                    s.token = None;
                    s.user = None;
                });
                false
            }
        }
    }

    // =========================================================================
    // LOGIN / REGISTER
    // =========================================================================

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the server's `detail` (or "Login failed") when credentials are
    /// refused, and [`AuthError::Profile`] when the user cannot be loaded.
    /// Existing state is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let pair = self.api.login(email, password).await.map_err(|e| {
            log::error!("login error: {e}");
            AuthError::rejected(&e, LOGIN_FAILED)
        })?;
        self.establish(pair).await
    }

    /// Create an account and sign in. A blank `name` is not sent.
    ///
    /// # Errors
    ///
    /// As [`SessionStore::login`], with the fallback "Registration failed".
    pub async fn register(&self, email: &str, password: &str, name: Option<&str>) -> Result<(), AuthError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let pair = self.api.register(email, password, name).await.map_err(|e| {
            log::error!("registration error: {e}");
            AuthError::rejected(&e, REGISTRATION_FAILED)
        })?;
        self.establish(pair).await
    }

    async fn establish(&self, pair: TokenPair) -> Result<(), AuthError> {
        let user = self
            .api
            .current_user(Some(&pair.access_token))
            .await
            .map_err(|e| {
                log::error!("user fetch after sign-in failed: {e}");
                AuthError::Profile
            })?;
        self.sign_ins.set(self.sign_ins.get() + 1);
        self.persist(&pair);
        self.update(|s| {
            s.token = Some(pair.access_token);
            s.user = Some(user);
        });
        Ok(())
    }

    // =========================================================================
    // LOGOUT
    // =========================================================================

    /// Revoke the current session and clear local state.
    pub async fn logout(&self) {
        let token = self.state.borrow().token.clone();
        if let Err(e) = self.api.logout(token.as_deref()).await {
            log::error!("logout error: {e}");
        }
        self.clear_session();
    }

    /// Revoke every session of the user and clear local state.
    pub async fn logout_all(&self) {
        let token = self.state.borrow().token.clone();
        if let Err(e) = self.api.logout_all(token.as_deref()).await {
            log::error!("logout all error: {e}");
        }
        self.clear_session();
    }
}
