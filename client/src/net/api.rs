//! REST API helpers for the external auth service and the waitlist endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` instead of panicking. Transport failures and
//! non-2xx responses are separate variants, but callers in `state::session`
//! treat both as "the call failed" and only read `detail` for user messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, LoginRequest, RefreshRequest, RegisterRequest, WaitlistRequest};
use super::types::{TokenPair, User, WaitlistResponse};

/// Path prefix of every auth endpoint on the API host.
pub const AUTH_PREFIX: &str = "/api/v1/auth";

/// Failure of a single HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser (SSR render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided `detail` message, when the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Build the absolute URL of an auth endpoint, e.g. `auth_endpoint(base, "me")`.
pub fn auth_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{AUTH_PREFIX}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for an access token.
pub fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

// =============================================================================
// AUTH GATEWAY
// =============================================================================

/// Remote auth operations used by the session store.
///
/// The browser is single-threaded and `gloo-net` futures are `!Send`, so the
/// trait is declared `?Send`.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /me`; any non-2xx means the session is invalid.
    async fn current_user(&self, access_token: Option<&str>) -> Result<User, ApiError>;
    /// `POST /login`.
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError>;
    /// `POST /register`.
    async fn register(&self, email: &str, password: &str, name: Option<&str>) -> Result<TokenPair, ApiError>;
    /// `POST /refresh`.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError>;
    /// `POST /logout`; revokes the current session server-side.
    async fn logout(&self, access_token: Option<&str>) -> Result<(), ApiError>;
    /// `POST /logout-all`; revokes every session of the user.
    async fn logout_all(&self, access_token: Option<&str>) -> Result<(), ApiError>;
}

/// [`AuthApi`] over HTTP with cookies included and a bearer token when known.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the build-time configured API root.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn endpoint(&self, path: &str) -> String {
        auth_endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
fn session_request(
    builder: gloo_net::http::RequestBuilder,
    access_token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    let builder = builder
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");
    match access_token {
        Some(token) => builder.header("Authorization", &bearer_header(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message());
    ApiError::Status { status, detail }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
impl HttpAuthApi {
    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let resp = session_request(gloo_net::http::Request::post(&self.endpoint(path)), access_token)
            .json(body)?
            .send()
            .await?;
        read_json(resp).await
    }

    async fn post_empty(&self, path: &str, access_token: Option<&str>) -> Result<(), ApiError> {
        let resp = session_request(gloo_net::http::Request::post(&self.endpoint(path)), access_token)
            .build()?
            .send()
            .await?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn current_user(&self, access_token: Option<&str>) -> Result<User, ApiError> {
        let resp = session_request(gloo_net::http::Request::get(&self.endpoint("me")), access_token)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.post_json("login", &LoginRequest { email, password }, None).await
    }

    async fn register(&self, email: &str, password: &str, name: Option<&str>) -> Result<TokenPair, ApiError> {
        self.post_json("register", &RegisterRequest { email, password, name }, None)
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.post_json("refresh", &RefreshRequest { refresh_token }, None).await
    }

    async fn logout(&self, access_token: Option<&str>) -> Result<(), ApiError> {
        self.post_empty("logout", access_token).await
    }

    async fn logout_all(&self, access_token: Option<&str>) -> Result<(), ApiError> {
        self.post_empty("logout-all", access_token).await
    }
}

#[cfg(not(feature = "hydrate"))]
#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn current_user(&self, access_token: Option<&str>) -> Result<User, ApiError> {
        let _ = access_token;
        Err(ApiError::Unavailable)
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }

    async fn register(&self, email: &str, password: &str, name: Option<&str>) -> Result<TokenPair, ApiError> {
        let _ = (email, password, name);
        Err(ApiError::Unavailable)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        let _ = refresh_token;
        Err(ApiError::Unavailable)
    }

    async fn logout(&self, access_token: Option<&str>) -> Result<(), ApiError> {
        let _ = access_token;
        Err(ApiError::Unavailable)
    }

    async fn logout_all(&self, access_token: Option<&str>) -> Result<(), ApiError> {
        let _ = access_token;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// WAITLIST
// =============================================================================

/// Raw waitlist reply: HTTP success flag plus the decoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistReply {
    pub ok: bool,
    pub body: WaitlistResponse,
}

/// Post an email to the waitlist endpoint at `url`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not JSON.
/// Non-2xx statuses are reported through [`WaitlistReply::ok`] instead, since
/// the endpoint explains rejections in the body.
pub async fn submit_waitlist(url: &str, email: &str) -> Result<WaitlistReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(&WaitlistRequest { email })?
            .send()
            .await?;
        let ok = resp.ok();
        let body = resp
            .json::<WaitlistResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(WaitlistReply { ok, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email);
        Err(ApiError::Unavailable)
    }
}
