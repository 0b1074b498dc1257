//! App core for forgemark.
//!
//! Central struct owning the storage backend, the URL resolver, and the
//! platform detector. The bookmark store borrows the backend with a
//! lifetime, so it is created on demand via [`App::store`] rather than
//! stored here.

use crate::managers::bookmark_store::BookmarkStore;
use crate::services::platform_detector::PlatformDetector;
use crate::services::url_resolver::UrlResolver;
use crate::storage::backend::{MemoryBackend, StorageBackend};
#[cfg(feature = "sqlite")]
use crate::types::errors::StorageError;

/// Central application struct composing the storage backend with the
/// stateless services.
pub struct App {
    storage: Box<dyn StorageBackend>,
    pub resolver: UrlResolver,
    pub detector: PlatformDetector,
}

impl App {
    /// Creates an App over an explicit storage backend.
    pub fn with_backend(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            storage,
            resolver: UrlResolver::new(),
            detector: PlatformDetector::with_defaults(),
        }
    }

    /// Creates an App persisting to a SQLite database at `db_path`.
    ///
    /// # Errors
    /// Returns [`StorageError::OpenFailed`] if the database cannot be
    /// opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn open<P: AsRef<std::path::Path>>(db_path: P) -> Result<Self, StorageError> {
        let backend = crate::storage::sqlite::SqliteBackend::open(db_path)?;
        Ok(Self::with_backend(Box::new(backend)))
    }

    /// Creates an App with non-persistent in-memory storage.
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()))
    }

    /// Creates a bookmark store borrowing this App's backend.
    pub fn store(&self) -> BookmarkStore<'_> {
        BookmarkStore::new(self.storage.as_ref())
    }
}
