//! forgemark persistence layer.
//!
//! The bookmark store talks to a [`backend::StorageBackend`] — a minimal
//! key-value interface holding JSON values. Three implementations ship with
//! the crate:
//!
//! - [`backend::MemoryBackend`] — non-persistent, for tests and demo mode
//! - [`sqlite::SqliteBackend`] — SQLite file or in-memory database (default
//!   `sqlite` feature)
//! - [`json_file::JsonFileBackend`] — a single JSON document on disk

pub mod backend;
pub mod json_file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use backend::{MemoryBackend, StorageBackend};
