//! Unit tests for bookmark import and export.
//!
//! These tests pin the interchange JSON field names, the merge semantics of
//! import, and the failure taxonomy.

use chrono::NaiveDate;
use serde_json::json;

use forgemark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use forgemark::services::import_export::{
    export_bookmarks, export_file_name, import_bookmarks, EXPORT_FILE_PREFIX,
};
use forgemark::storage::backend::MemoryBackend;
use forgemark::types::bookmark::Bookmark;
use forgemark::types::errors::ImportError;
use forgemark::types::identity::{Platform, ThreadType};

fn make_bookmark(id: &str, repository: &str, permalink: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: "Title".to_string(),
        permalink: permalink.to_string(),
        repository: repository.to_string(),
        platform: Platform::Github,
        thread_type: ThreadType::Issues,
        context_id: 42,
        comment_text: "Body".to_string(),
        author: "alice".to_string(),
        avatar: String::new(),
        timestamp: "2026-08-07T10:00:00Z".to_string(),
    }
}

/// The serialized bookmark uses the interchange field names, so documents
/// exported by the original extension import unchanged.
#[test]
fn bookmark_serializes_with_interchange_field_names() {
    let bookmark = make_bookmark("1", "user/repo", "https://github.com/user/repo/issues/42#issuecomment-7");
    let value = serde_json::to_value(&bookmark).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "1",
            "title": "Title",
            "permalink": "https://github.com/user/repo/issues/42#issuecomment-7",
            "repository": "user/repo",
            "platform": "github",
            "type": "issues",
            "contextId": 42,
            "commentText": "Body",
            "author": "alice",
            "avatar": "",
            "timestamp": "2026-08-07T10:00:00Z",
        })
    );
}

/// Export produces a JSON document that parses back to the same mapping.
#[test]
fn export_round_trips_through_serde() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);
    store
        .add_bookmark(make_bookmark("1", "user/repo", "https://github.com/user/repo/issues/1#issuecomment-1"))
        .unwrap();

    let document = export_bookmarks(&store.get_bookmarks()).unwrap();
    let parsed: forgemark::types::bookmark::BookmarkStorage =
        serde_json::from_str(&document).unwrap();

    assert_eq!(parsed, store.get_bookmarks());
}

#[test]
fn export_file_name_embeds_the_date() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(export_file_name(date), "gitbookmark-export-2026-08-07.json");
    assert!(export_file_name(date).starts_with(EXPORT_FILE_PREFIX));
}

/// Import into an empty store adds everything and reports the count.
#[test]
fn import_into_empty_store_adds_all() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);

    let document = json!({
        "user/repo": [
            serde_json::to_value(make_bookmark("1", "user/repo", "https://github.com/user/repo/issues/1#issuecomment-1")).unwrap(),
            serde_json::to_value(make_bookmark("2", "user/repo", "https://github.com/user/repo/issues/2#issuecomment-2")).unwrap(),
        ]
    })
    .to_string();

    let imported = import_bookmarks(&mut store, &document).unwrap();
    assert_eq!(imported, 2);
    assert_eq!(store.get_bookmarks()["user/repo"].len(), 2);
}

/// Import skips entries whose permalink already exists and appends the
/// survivors at the end of the list.
#[test]
fn import_skips_permalink_duplicates_and_appends() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);
    store
        .add_bookmark(make_bookmark("live", "user/repo", "https://github.com/user/repo/issues/1#issuecomment-1"))
        .unwrap();

    let document = json!({
        "user/repo": [
            serde_json::to_value(make_bookmark("dup", "user/repo", "https://github.com/user/repo/issues/1#issuecomment-1")).unwrap(),
            serde_json::to_value(make_bookmark("new", "user/repo", "https://github.com/user/repo/issues/9#issuecomment-9")).unwrap(),
        ]
    })
    .to_string();

    let imported = import_bookmarks(&mut store, &document).unwrap();
    assert_eq!(imported, 1);

    let bookmarks = store.get_bookmarks();
    let ids: Vec<&str> = bookmarks["user/repo"].iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["live", "new"]);
}

/// Import never creates a repository key for an empty imported list.
#[test]
fn import_ignores_empty_repository_lists() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);

    let imported = import_bookmarks(&mut store, r#"{"user/repo": []}"#).unwrap();
    assert_eq!(imported, 0);
    assert!(store.get_bookmarks().is_empty());
}

#[test]
fn import_rejects_documents_that_are_not_json() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);

    let result = import_bookmarks(&mut store, "{ not json");
    assert!(matches!(result, Err(ImportError::InvalidFormat(_))));
}

#[test]
fn import_rejects_documents_that_are_not_a_mapping() {
    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);

    let result = import_bookmarks(&mut store, "[1, 2, 3]");
    assert!(matches!(result, Err(ImportError::InvalidFormat(_))));

    let result = import_bookmarks(&mut store, r#"{"user/repo": [{"id": "1"}]}"#);
    assert!(matches!(result, Err(ImportError::InvalidFormat(_))));
}
