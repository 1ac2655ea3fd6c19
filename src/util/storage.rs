//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme manager only needs "read one key / write one key". The browser
//! implementation goes through `localStorage`; outside a browser it no-ops so
//! native builds stay deterministic. [`MemoryStore`] backs tests.

use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Durable string key-value store.
pub trait PreferenceStore {
    /// Read `key`, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `key`. Failures are swallowed; storage is best-effort.
    fn set(&mut self, key: &str, value: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "browser")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }

    /// Drop `key`, as if the user cleared site data.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
