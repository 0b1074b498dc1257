use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identity::{Platform, ThreadType};

/// Represents a saved comment bookmark.
///
/// The JSON field names match the export format of the original browser
/// extension, so exported documents import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Opaque caller-generated identifier (time-based in practice).
    pub id: String,
    pub title: String,
    /// Primary dedup key for comment-anchored bookmarks.
    pub permalink: String,
    /// `owner/name` form; doubles as the storage mapping key.
    pub repository: String,
    pub platform: Platform,
    #[serde(rename = "type")]
    pub thread_type: ThreadType,
    /// The issue / merge-request / work-item number the comment belongs to.
    #[serde(rename = "contextId")]
    pub context_id: u64,
    #[serde(rename = "commentText")]
    pub comment_text: String,
    pub author: String,
    pub avatar: String,
    /// RFC 3339 timestamp scraped from the comment.
    pub timestamp: String,
}

/// The persisted mapping: repository name to its bookmarks, newest first.
pub type BookmarkStorage = BTreeMap<String, Vec<Bookmark>>;
