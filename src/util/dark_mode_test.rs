use super::*;
use crate::util::storage::{MemoryStore, StorageError};

#[derive(Debug)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn read_preference_falls_back_to_system() {
    let store = MemoryStore::default();
    assert!(!read_preference(&store, false));
    assert!(read_preference(&store, true));
}

#[test]
fn stored_preference_wins_over_system() {
    let store = MemoryStore::default();
    store.set(DARK_MODE_KEY, "false").unwrap();
    assert!(!read_preference(&store, true));
    store.set(DARK_MODE_KEY, "true").unwrap();
    assert!(read_preference(&store, false));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::default();
    assert!(toggle(&store, false));
    assert_eq!(store.get(DARK_MODE_KEY).unwrap(), Some("true".to_owned()));
    assert!(!toggle(&store, true));
    assert_eq!(store.get(DARK_MODE_KEY).unwrap(), Some("false".to_owned()));
}

#[test]
fn broken_store_degrades_gracefully() {
    assert!(read_preference(&BrokenStore, true));
    assert!(toggle(&BrokenStore, false));
}

#[cfg(not(feature = "csr"))]
#[test]
fn system_preference_is_light_off_browser() {
    assert!(!system_prefers_dark());
}
