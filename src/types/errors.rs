use std::fmt;

// === StorageError ===

/// Errors related to bookmark persistence operations.
#[derive(Debug)]
pub enum StorageError {
    /// The persistence backend could not be opened.
    OpenFailed(String),
    /// Reading from the persistence backend failed.
    ReadFailed(String),
    /// Writing to the persistence backend failed.
    WriteFailed(String),
    /// Stored data could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::OpenFailed(msg) => write!(f, "Storage open failed: {}", msg),
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === ImportError ===

/// Errors related to bookmark import operations.
#[derive(Debug)]
pub enum ImportError {
    /// The imported document is not a valid bookmark mapping.
    InvalidFormat(String),
    /// Persisting the merged mapping failed.
    StorageFailure(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::InvalidFormat(msg) => write!(f, "Invalid import format: {}", msg),
            ImportError::StorageFailure(msg) => write!(f, "Import storage failure: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}
