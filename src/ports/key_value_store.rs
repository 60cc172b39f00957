//! Key-Value Storage Port - durable, origin-scoped string storage.
//!
//! The browser build backs this with `localStorage`; native builds use
//! the file adapter. Operations are synchronous: writes happen within a
//! single event turn, so no two writers race in practice.

use thiserror::Error;

/// Errors from the durable key-value store.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Failed to serialize record: {0}")]
    Serialization(String),
}

/// Port for durable string storage.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any existing one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
