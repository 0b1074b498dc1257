//! Unit tests for the error type Display implementations.

use forgemark::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::OpenFailed("no such file".to_string()).to_string(),
        "Storage open failed: no such file"
    );
    assert_eq!(
        StorageError::ReadFailed("backend unavailable".to_string()).to_string(),
        "Storage read failed: backend unavailable"
    );
    assert_eq!(
        StorageError::WriteFailed("disk full".to_string()).to_string(),
        "Storage write failed: disk full"
    );
    assert_eq!(
        StorageError::Serialization("trailing comma".to_string()).to_string(),
        "Storage serialization error: trailing comma"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(StorageError::ReadFailed("backend unavailable".to_string()));
    assert!(err.source().is_none());
}

// === ImportError Tests ===

#[test]
fn import_error_display_variants() {
    assert_eq!(
        ImportError::InvalidFormat("expected an object".to_string()).to_string(),
        "Invalid import format: expected an object"
    );
    assert_eq!(
        ImportError::StorageFailure("disk full".to_string()).to_string(),
        "Import storage failure: disk full"
    );
}

#[test]
fn import_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(ImportError::InvalidFormat("expected an object".to_string()));
    assert!(err.source().is_none());
}
