//! Durable client storage for the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes here on every mutation and the request gateway
//! reads the bearer token from here on every request, so this is the single
//! source both sides agree on. Browser builds use `localStorage`; server
//! rendering sees an always-empty store so the first client render matches.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are swallowed. A failed write leaves memory and storage
//! out of sync until the next mutation.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Fixed key of the single persisted session record.
pub const SESSION_KEY: &str = "freshtrack_session";

/// Key/value storage that survives page reloads.
pub trait DurableStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Load a JSON value for `key`. Missing or unparseable values read as `None`.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Save a JSON value for `key`.
    fn save_json<T: Serialize>(&self, key: &str, value: &T)
    where
        Self: Sized,
    {
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        self.set(key, &raw);
    }
}

/// Serialized `{user, token}` copy of the in-memory session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: Option<User>,
    pub token: Option<String>,
}

/// Read the persisted session record, if any.
pub fn load_session<S: DurableStore>(store: &S) -> Option<SessionRecord> {
    store.load_json(SESSION_KEY)
}

/// Bearer token from the persisted record. Empty tokens count as absent.
pub fn load_token<S: DurableStore>(store: &S) -> Option<String> {
    load_session(store)
        .and_then(|record| record.token)
        .filter(|token| !token.is_empty())
}

pub fn save_session<S: DurableStore>(store: &S, record: &SessionRecord) {
    store.save_json(SESSION_KEY, record);
}

pub fn clear_session<S: DurableStore>(store: &S) {
    store.remove(SESSION_KEY);
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `window.localStorage`. A no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DurableStore for LocalStorage {
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
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
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
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

// =============================================================================
// IN-MEMORY STORAGE
// =============================================================================

/// Process-local store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
