//! Key/value persistence for the session user and UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser build values live in `localStorage`; native builds (and
//! tests) use an in-memory map behind the same [`KeyValueStore`] trait, so
//! session restore and corruption handling are exercised without a DOM.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::User;

/// Error returned by [`KeyValueStore`] operations and the JSON helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota, security policy).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// A stored value is not valid JSON for the expected type.
    #[error("corrupt value under {key:?}: {reason}")]
    Corrupt { key: String, reason: String },
    /// A value could not be serialized before writing.
    #[error("failed to serialize value for {key:?}: {reason}")]
    Serialize { key: String, reason: String },
}

/// String key/value storage.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store used off-browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// The store for the current build: `localStorage` in the browser, memory
/// otherwise.
#[must_use]
pub fn default_store() -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryStore::default())
    }
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] when the stored text does not parse, or
/// the backend error when it cannot be read.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), reason: e.to_string() })
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] or the backend write error.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize { key: key.to_owned(), reason: e.to_string() })?;
    store.set(key, &raw)
}

/// The session user slot: one key holding the serialized [`User`].
#[derive(Debug, Clone)]
pub struct SessionVault {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionVault {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Read the stored user.
    ///
    /// # Errors
    ///
    /// See [`load_json`].
    pub fn load(&self) -> Result<Option<User>, StorageError> {
        load_json(self.store.as_ref(), &self.key)
    }

    /// Persist `user` as the session.
    ///
    /// # Errors
    ///
    /// See [`save_json`].
    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), &self.key, user)
    }

    /// Remove the session entry.
    ///
    /// # Errors
    ///
    /// Returns the backend error when storage cannot be reached.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}
