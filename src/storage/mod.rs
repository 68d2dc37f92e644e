//! Snapshot storage.
//!
//! The engine writes a full snapshot of the deck after every successful
//! mutation and reads it back once at startup. Storage is a string
//! key-value store, so anything from a browser's local storage to a file
//! per key can back it.
//!
//! ## Key Types
//!
//! - `SnapshotStore`: Key-value store trait
//! - `MemoryStore`: In-process map (tests, embedded front ends)
//! - `FileStore`: One JSON file per key, written atomically
//! - `SnapshotEntry`: Snapshot record (card plus commander flag)

pub mod file;
pub mod snapshot;

use rustc_hash::FxHashMap;

use crate::core::StorageError;

pub use file::FileStore;
pub use snapshot::{decode_snapshot, encode_snapshot, SnapshotEntry};

/// String key-value store holding deck snapshots.
pub trait SnapshotStore {
    /// Read the value under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Fails when the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Fails when the backing store cannot be written.
    fn save(&mut self, key: &str, contents: &str) -> Result<(), StorageError>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<(), StorageError> {
        (**self).save(key, contents)
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), contents.into());
        store
    }

    /// Borrow the raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
