//! Key-value persistence for decks and study sessions
//!
//! The stores treat persistence as synchronous key-value storage with opaque
//! string values (JSON by convention): `load` once at startup, `save` after
//! every mutation. Two backends are provided: [`FileStore`] keeps one JSON
//! file per key, [`MemoryStore`] is a HashMap-backed fake for tests and
//! embedders that do not need durability.

mod file_store;
mod memory;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file_store::FileStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Synchronous key-value storage backing the deck store and session ledger.
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Load a JSON collection from `store`, falling back to empty.
///
/// An absent key, a read failure, and malformed JSON all yield an empty Vec:
/// a corrupt store must never prevent startup. The failure is logged.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match store.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Malformed data under key '{}', starting empty: {}", key, e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to load key '{}', starting empty: {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_collection_absent_key() {
        let store = MemoryStore::new();
        let items: Vec<u32> = load_collection(&store, "missing");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_collection_malformed_json() {
        let store = MemoryStore::new();
        store.save("numbers", "not json at all").unwrap();

        let items: Vec<u32> = load_collection(&store, "numbers");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_collection_round_trip() {
        let store = MemoryStore::new();
        store.save("numbers", "[3, 1, 2]").unwrap();

        let items: Vec<u32> = load_collection(&store, "numbers");
        assert_eq!(items, vec![3, 1, 2]);
    }
}
