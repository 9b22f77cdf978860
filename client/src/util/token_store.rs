//! Persisted bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client state that survives a reload. The browser
//! store keeps it in `localStorage`; the in-memory store backs server
//! rendering and tests.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex};

use crate::config::TOKEN_STORAGE_KEY;

/// Get/set/clear access to the persisted bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
///
/// Outside the browser every operation is a no-op and `get` returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = TOKEN_STORAGE_KEY;
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                leptos::logging::warn!("failed to persist token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// Token store held in process memory. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create a store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.into()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
