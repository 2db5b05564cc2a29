//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the waitlist store behind a trait object so the same handlers run
//! against Postgres or the in-memory store, plus the startup configuration.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::waitlist::WaitlistStore;

/// Shared application state. Clone is required by Axum; fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub waitlist: Arc<dyn WaitlistStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(waitlist: Arc<dyn WaitlistStore>, config: ServerConfig) -> Self {
        Self { waitlist, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::waitlist::{MemoryWaitlistStore, WaitlistEntry, WaitlistError};

    /// Store whose every call fails like an unreachable database.
    pub struct FailingStore;

    #[async_trait::async_trait]
    impl WaitlistStore for FailingStore {
        async fn upsert(&self, _entry: WaitlistEntry) -> Result<(), WaitlistError> {
            Err(WaitlistError::Db(sqlx::Error::PoolTimedOut))
        }
    }

    /// `AppState` over a fresh in-memory store with default config. The store
    /// is returned too so tests can inspect what was written.
    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryWaitlistStore>) {
        let store = Arc::new(MemoryWaitlistStore::default());
        (AppState::new(store.clone(), ServerConfig::default()), store)
    }

    #[must_use]
    pub fn failing_app_state() -> AppState {
        AppState::new(Arc::new(FailingStore), ServerConfig::default())
    }
}
