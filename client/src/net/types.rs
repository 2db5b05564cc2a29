//! Shared wire DTOs for the auth API, waitlist endpoint, and blog content.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON the external services emit, so serde can stay
//! derive-only. Optional fields default when absent because the auth API and
//! the blog index both omit keys rather than sending `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// An authenticated user as returned by `GET /api/v1/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Short display name, if set at registration.
    #[serde(default)]
    pub name: Option<String>,
    /// Full display name, if the profile has one.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Object-storage prefix holding the user's uploaded documents.
    #[serde(default)]
    pub s3_bucket_prefix: Option<String>,
    /// Vector-index namespace holding the user's document embeddings.
    #[serde(default)]
    pub pinecone_namespace: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Preferred human-readable name: `full_name`, then `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Access/refresh token pair issued by login, register, and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /api/v1/auth/login` payload.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /api/v1/auth/register` payload.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// `POST /api/v1/auth/refresh` payload.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Error body returned by the auth API on non-2xx responses.
///
/// `detail` is usually a string but validation failures send a list of
/// objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The human-readable `detail` message, if the server sent a string.
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(ToOwned::to_owned)
    }
}

// =============================================================================
// WAITLIST
// =============================================================================

/// Waitlist signup payload.
#[derive(Debug, Serialize)]
pub struct WaitlistRequest<'a> {
    pub email: &'a str,
}

/// Waitlist endpoint response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// BLOG
// =============================================================================

/// Intended reader of a blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Executive,
    Technical,
}

impl Audience {
    /// Badge label shown on cards and article headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Executive => "Executive",
            Self::Technical => "Technical",
        }
    }
}

/// Editorial category of a blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    News,
    Guide,
    Analysis,
}

/// One entry of `/blog-metadata.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// URL slug; unique across the index.
    pub slug: String,
    pub audience: Audience,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Pre-formatted reading time, e.g. `"5 min read"`.
    pub reading_time: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// File name under `/posts/`; derived from the slug when absent.
    #[serde(default)]
    pub html_file: Option<String>,
}

/// The static blog index document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogMetadata {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub last_updated: Option<String>,
}
