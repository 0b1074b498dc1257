//! Bookmark import and export.
//!
//! Export is the pretty-printed JSON of the whole mapping — the one
//! interchange format the crate owns. Import merges a previously exported
//! document into the live store, skipping entries whose permalink already
//! exists in the target repository list.

use chrono::NaiveDate;

use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::types::bookmark::BookmarkStorage;
use crate::types::errors::{ImportError, StorageError};

/// File-name prefix for exported documents.
pub const EXPORT_FILE_PREFIX: &str = "gitbookmark-export-";

/// Serializes the full mapping as a pretty-printed JSON document.
pub fn export_bookmarks(bookmarks: &BookmarkStorage) -> Result<String, StorageError> {
    serde_json::to_string_pretty(bookmarks).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Suggested file name for an export created on the given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Merges an exported JSON document into the store.
///
/// Imported entries keep their original ids and land at the end of their
/// repository's list; entries whose permalink already exists in that list
/// are skipped. Returns the number of bookmarks actually added.
///
/// # Errors
/// [`ImportError::InvalidFormat`] if the document is not a repository-keyed
/// bookmark mapping; [`ImportError::StorageFailure`] if persisting the
/// merged mapping fails.
pub fn import_bookmarks(
    store: &mut dyn BookmarkStoreTrait,
    document: &str,
) -> Result<usize, ImportError> {
    let imported: BookmarkStorage =
        serde_json::from_str(document).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

    let mut current = store.get_bookmarks();
    let mut added = 0usize;

    for (repository, entries) in imported {
        if entries.is_empty() {
            continue;
        }
        let list = current.entry(repository).or_default();
        for bookmark in entries {
            let exists = list.iter().any(|b| b.permalink == bookmark.permalink);
            if !exists {
                list.push(bookmark);
                added += 1;
            }
        }
    }

    store
        .save_bookmarks(&current)
        .map_err(|e| ImportError::StorageFailure(e.to_string()))?;
    Ok(added)
}
