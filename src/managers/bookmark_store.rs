//! Bookmark store for forgemark.
//!
//! Implements `BookmarkStoreTrait` — loading, saving, duplicate-aware
//! insertion, and removal of comment bookmarks, backed by a pluggable
//! [`StorageBackend`]. The whole mapping lives under one storage key and is
//! rewritten on every mutation.

use chrono::DateTime;

use crate::storage::backend::StorageBackend;
use crate::types::bookmark::{Bookmark, BookmarkStorage};
use crate::types::errors::StorageError;

/// Storage key holding the entire bookmark mapping.
///
/// The literal is inherited from the original browser extension so existing
/// stores and exported documents load unchanged.
pub const STORAGE_KEY: &str = "gitlab_github_bookmarks";

/// Proximity window for page-level duplicate detection, in milliseconds.
///
/// Inherited compatibility heuristic: two page-level bookmarks by the same
/// author on the same thread closer together than this count as one
/// browsing action.
pub const DUPLICATE_WINDOW_MS: i64 = 60_000;

/// Permalink fragments that mark a bookmark as comment-anchored.
const COMMENT_ANCHOR_MARKERS: [&str; 2] = ["#note_", "#issuecomment-"];

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Loads the full persisted mapping. Read failures yield an empty
    /// mapping — the UI must render, not crash.
    fn get_bookmarks(&self) -> BookmarkStorage;
    /// Persists the full mapping in a single write. Failures propagate.
    fn save_bookmarks(&mut self, bookmarks: &BookmarkStorage) -> Result<(), StorageError>;
    /// Inserts a bookmark at the head of its repository's list.
    /// Returns `false` (not an error) when rejected as a duplicate.
    fn add_bookmark(&mut self, bookmark: Bookmark) -> Result<bool, StorageError>;
    /// Removes a bookmark by id. Idempotent — an unknown id is a no-op.
    fn remove_bookmark(&mut self, repository: &str, bookmark_id: &str)
        -> Result<(), StorageError>;
    /// Rewrites a bookmark's title. Idempotent — an unknown id is a no-op.
    fn update_title(
        &mut self,
        repository: &str,
        bookmark_id: &str,
        title: &str,
    ) -> Result<(), StorageError>;
    /// Reports whether any stored bookmark carries exactly this permalink.
    fn is_bookmarked(&self, permalink: &str) -> bool;
}

/// Bookmark store over a borrowed storage backend.
pub struct BookmarkStore<'a> {
    backend: &'a dyn StorageBackend,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a new `BookmarkStore` using the provided backend.
    pub fn new(backend: &'a dyn StorageBackend) -> Self {
        Self { backend }
    }

    /// Parses an RFC 3339 timestamp to epoch milliseconds.
    fn timestamp_ms(raw: &str) -> Option<i64> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|t| t.timestamp_millis())
    }

    /// The duplicate predicate.
    ///
    /// A comment-anchored candidate (permalink carries `#note_` or
    /// `#issuecomment-`) duplicates only an entry with a byte-identical
    /// permalink. A page-level candidate duplicates any entry on the same
    /// thread by the same author within [`DUPLICATE_WINDOW_MS`]. An
    /// unparseable timestamp on either side makes the proximity test false,
    /// so malformed timestamps never suppress an insert.
    fn is_duplicate(existing: &[Bookmark], candidate: &Bookmark) -> bool {
        let comment_anchored = COMMENT_ANCHOR_MARKERS
            .iter()
            .any(|marker| candidate.permalink.contains(marker));

        existing.iter().any(|entry| {
            if comment_anchored {
                return entry.permalink == candidate.permalink;
            }

            let close_in_time = match (
                Self::timestamp_ms(&entry.timestamp),
                Self::timestamp_ms(&candidate.timestamp),
            ) {
                (Some(a), Some(b)) => (a - b).abs() < DUPLICATE_WINDOW_MS,
                _ => false,
            };

            entry.repository == candidate.repository
                && entry.context_id == candidate.context_id
                && entry.author == candidate.author
                && close_in_time
        })
    }
}

impl BookmarkStoreTrait for BookmarkStore<'_> {
    fn get_bookmarks(&self) -> BookmarkStorage {
        match self.backend.get(STORAGE_KEY) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(bookmarks) => bookmarks,
                Err(e) => {
                    log::warn!("Discarding undecodable bookmark data: {}", e);
                    BookmarkStorage::new()
                }
            },
            Ok(None) => BookmarkStorage::new(),
            Err(e) => {
                log::warn!("Failed to load bookmarks: {}", e);
                BookmarkStorage::new()
            }
        }
    }

    fn save_bookmarks(&mut self, bookmarks: &BookmarkStorage) -> Result<(), StorageError> {
        let value = serde_json::to_value(bookmarks)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.set(STORAGE_KEY, value)
    }

    fn add_bookmark(&mut self, bookmark: Bookmark) -> Result<bool, StorageError> {
        let mut bookmarks = self.get_bookmarks();
        let repository = bookmark.repository.clone();

        {
            let list = bookmarks.entry(repository).or_default();
            if Self::is_duplicate(list, &bookmark) {
                return Ok(false);
            }
            list.insert(0, bookmark);
        }

        self.save_bookmarks(&bookmarks)?;
        Ok(true)
    }

    fn remove_bookmark(
        &mut self,
        repository: &str,
        bookmark_id: &str,
    ) -> Result<(), StorageError> {
        let mut bookmarks = self.get_bookmarks();

        if let Some(list) = bookmarks.get_mut(repository) {
            list.retain(|b| b.id != bookmark_id);
            if list.is_empty() {
                bookmarks.remove(repository);
            }
            self.save_bookmarks(&bookmarks)?;
        }
        Ok(())
    }

    fn update_title(
        &mut self,
        repository: &str,
        bookmark_id: &str,
        title: &str,
    ) -> Result<(), StorageError> {
        let mut bookmarks = self.get_bookmarks();
        let mut changed = false;

        if let Some(list) = bookmarks.get_mut(repository) {
            if let Some(bookmark) = list.iter_mut().find(|b| b.id == bookmark_id) {
                bookmark.title = title.to_string();
                changed = true;
            }
        }

        if changed {
            self.save_bookmarks(&bookmarks)?;
        }
        Ok(())
    }

    fn is_bookmarked(&self, permalink: &str) -> bool {
        self.get_bookmarks()
            .values()
            .flatten()
            .any(|b| b.permalink == permalink)
    }
}
