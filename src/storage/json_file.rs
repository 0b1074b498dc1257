//! JSON-file key-value backend.
//!
//! The whole backend is one JSON document on disk: an object mapping keys to
//! values. A missing file reads as empty; a corrupt file is an error on both
//! read and write, never silently replaced.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::storage::backend::StorageBackend;
use crate::types::errors::StorageError;

/// Key-value backend persisting to a single JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend over the given file path. The file is created on
    /// first write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the backing document, or an empty object if the file is absent.
    fn load_document(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::ReadFailed(format!("Failed to read {}: {}", self.path.display(), e)))?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Serialization(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Serialization(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl StorageBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let document = self.load_document()?;
        Ok(document.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut document = self.load_document()?;
        document.insert(key.to_string(), value);

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::WriteFailed(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
