//! The storage backend trait and the in-memory reference implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::types::errors::StorageError;

/// Trait defining the key-value persistence interface used by the store.
///
/// Both operations take `&self`: backends guard their own state, which keeps
/// read-modify-write cycles through a shared backend reference serialized
/// within the process.
pub trait StorageBackend {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// In-memory backend used by tests and demo mode.
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
