//! Environment-driven server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup (after `.env` is loaded) and shared through
//! `AppState`. Every setting has a default so the site runs with an empty
//! environment, using the in-memory waitlist store.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_WAITLIST_SOURCE: &str = "coming-soon-page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres URL; `None` selects the in-memory waitlist store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Directory for static site files; `None` means the Leptos site root.
    pub site_dir: Option<PathBuf>,
    /// Single allowed CORS origin; `None` allows any origin.
    pub cors_allow_origin: Option<String>,
    /// Value recorded as `source` on every waitlist entry.
    pub waitlist_source: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            site_dir: None,
            cors_allow_origin: None,
            waitlist_source: DEFAULT_WAITLIST_SOURCE.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load from `PORT`, `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `SITE_DIR`,
    /// `CORS_ALLOW_ORIGIN`, and `WAITLIST_SOURCE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset and
    /// unparsable numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            port: env_parse(get("PORT"), DEFAULT_PORT),
            database_url: get("DATABASE_URL"),
            db_max_connections: env_parse(get("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS),
            site_dir: get("SITE_DIR").map(PathBuf::from),
            cors_allow_origin: get("CORS_ALLOW_ORIGIN").filter(|v| v != "*"),
            waitlist_source: get("WAITLIST_SOURCE").unwrap_or_else(|| DEFAULT_WAITLIST_SOURCE.to_owned()),
        }
    }
}

fn env_parse<T>(raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy,
{
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
