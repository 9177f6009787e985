//! Key-value persistence for small UI preferences.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: when `localStorage` is missing or a write is
//! rejected (private mode, quota), values live in memory for the session and
//! nothing is surfaced to the user.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal string store. Methods take `&self`; implementations use interior
/// mutability so a store can be shared by event handlers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store; also the session fallback for [`LocalStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`, degrading to memory when unavailable.
#[cfg(feature = "browser")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
    session: MemoryStore,
}

#[cfg(feature = "browser")]
impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences last for this session only");
        }
        Self { storage, session: MemoryStore::new() }
    }
}

#[cfg(feature = "browser")]
impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "browser")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        // Writes from this session win over whatever storage held at load.
        self.session.get(key).or_else(|| {
            self.storage
                .as_ref()
                .and_then(|storage| storage.get_item(key).ok().flatten())
        })
    }

    fn set(&self, key: &str, value: &str) {
        self.session.set(key, value);
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}
