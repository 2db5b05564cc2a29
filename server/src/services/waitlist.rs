//! Waitlist signups: request validation, email normalization, storage.
//!
//! DESIGN
//! ======
//! Route handlers hand the raw request body to [`parse_signup`] and then call
//! [`subscribe`] with an [`WaitlistStore`]. Storage is a trait so the service
//! runs against Postgres in production and an in-memory map without a
//! database. One entry per normalized email; re-subscribing overwrites it.

use std::collections::HashMap;

use sqlx::PgPool;
use time::OffsetDateTime;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub email: String,
    pub created_at: OffsetDateTime,
    pub source: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("Invalid JSON in request body")]
    InvalidJson,
    #[error("Email address is required")]
    MissingEmail,
    #[error("Invalid email address format")]
    InvalidEmail,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl WaitlistError {
    /// Whether the caller sent a bad request, as opposed to a storage fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Db(_))
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Extract and normalize the `email` field of a signup body.
///
/// An empty body is treated as `{}`. A body that is valid JSON but not an
/// object has no `email` field.
///
/// # Errors
///
/// Returns [`WaitlistError::InvalidJson`] for unparsable bodies and the
/// validation errors of [`normalize_email`] otherwise.
pub fn parse_signup(body: &[u8]) -> Result<String, WaitlistError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WaitlistError::MissingEmail);
    }
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|_| WaitlistError::InvalidJson)?;
    match value.get("email") {
        None | Some(serde_json::Value::Null) => Err(WaitlistError::MissingEmail),
        Some(serde_json::Value::String(raw)) => normalize_email(raw),
        Some(_) => Err(WaitlistError::InvalidEmail),
    }
}

/// Trim and lower-case `raw`, then apply the basic format check: an `@`, and
/// a `.` in the segment following the first `@`.
///
/// # Errors
///
/// [`WaitlistError::MissingEmail`] when blank, [`WaitlistError::InvalidEmail`]
/// when the format check fails.
pub fn normalize_email(raw: &str) -> Result<String, WaitlistError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(WaitlistError::MissingEmail);
    }
    let domain_has_dot = email.split('@').nth(1).is_some_and(|segment| segment.contains('.'));
    if !domain_has_dot {
        return Err(WaitlistError::InvalidEmail);
    }
    Ok(email)
}

// =============================================================================
// STORAGE
// =============================================================================

#[async_trait::async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Insert `entry`, replacing any entry with the same email.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::Db`] if the backing store fails.
    async fn upsert(&self, entry: WaitlistEntry) -> Result<(), WaitlistError>;
}

/// Postgres-backed store over the `waitlist` table.
pub struct PgWaitlistStore {
    pool: PgPool,
}

impl PgWaitlistStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WaitlistStore for PgWaitlistStore {
    async fn upsert(&self, entry: WaitlistEntry) -> Result<(), WaitlistError> {
        sqlx::query(
            "INSERT INTO waitlist (email, created_at, source) VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE
             SET created_at = EXCLUDED.created_at, source = EXCLUDED.source",
        )
        .bind(&entry.email)
        .bind(entry.created_at)
        .bind(&entry.source)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
impl PgWaitlistStore {
    /// Entry stored for a normalized email.
    pub async fn get(&self, email: &str) -> Result<Option<WaitlistEntry>, WaitlistError> {
        let row = sqlx::query_as::<_, (String, OffsetDateTime, String)>(
            "SELECT email, created_at, source FROM waitlist WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(email, created_at, source)| WaitlistEntry { email, created_at, source }))
    }
}

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct MemoryWaitlistStore {
    entries: RwLock<HashMap<String, WaitlistEntry>>,
}

#[cfg(test)]
impl MemoryWaitlistStore {
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn get(&self, email: &str) -> Result<Option<WaitlistEntry>, WaitlistError> {
        Ok(self.entries.read().await.get(email).cloned())
    }
}

#[async_trait::async_trait]
impl WaitlistStore for MemoryWaitlistStore {
    async fn upsert(&self, entry: WaitlistEntry) -> Result<(), WaitlistError> {
        self.entries.write().await.insert(entry.email.clone(), entry);
        Ok(())
    }
}

// =============================================================================
// SUBSCRIBE
// =============================================================================

/// Record `email` (already normalized) on the waitlist under `source`.
///
/// # Errors
///
/// Returns [`WaitlistError::Db`] if the store fails.
pub async fn subscribe(store: &dyn WaitlistStore, email: String, source: &str) -> Result<WaitlistEntry, WaitlistError> {
    let entry = WaitlistEntry { email, created_at: OffsetDateTime::now_utc(), source: source.to_owned() };
    store.upsert(entry.clone()).await?;
    tracing::info!(email = %entry.email, source = %entry.source, "waitlist signup stored");
    Ok(entry)
}

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod tests;
