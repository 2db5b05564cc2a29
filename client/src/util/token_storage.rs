//! Durable token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only talks to [`TokenStorage`]; the browser build uses
//! [`LocalTokenStorage`] while tests substitute an in-memory map.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// String key/value persistence for auth tokens.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// [`TokenStorage`] over `window.localStorage`; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

/// Log a failed storage write; returns whether it succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn warn_on_failure<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        log::warn!("failed to {action} {key}");
        return false;
    }
    true
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            warn_on_failure(storage.set_item(key, value), "persist", key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                warn_on_failure(storage.remove_item(key), "remove", key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
