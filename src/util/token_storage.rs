//! Durable storage for the raw bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps exactly one key (`newsToken`) in `localStorage`; its
//! absence means logged out. The session store receives a `TokenStorage`
//! handle instead of reaching for `localStorage` directly, so the expiry
//! cleanup path can be exercised natively with `MemoryStorage`.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "newsToken";

pub trait TokenStorage: Send + Sync + fmt::Debug {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Delete the persisted token.
    fn clear(&self);
}

/// `localStorage`-backed token storage. A no-op outside the browser build.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    key: &'static str,
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.key;
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            let _ = storage.set_item(self.key, token);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process token storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(token.into())) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
