//! Property-based tests for the bookmark interchange format.
//!
//! The JSON mapping is the one interchange contract the crate owns: a
//! document exported from a store must import into a fresh store as the
//! same mapping, field for field.

use std::collections::BTreeMap;

use proptest::prelude::*;

use forgemark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use forgemark::services::import_export::{export_bookmarks, import_bookmarks};
use forgemark::storage::backend::MemoryBackend;
use forgemark::types::bookmark::{Bookmark, BookmarkStorage};
use forgemark::types::identity::{Platform, ThreadType};

/// Builds a repository's bookmark list with per-index unique permalinks.
fn make_list(repo: &str, count: u8) -> Vec<Bookmark> {
    (0..count)
        .map(|index| Bookmark {
            id: format!("175400000{}{}", repo.len(), index),
            title: format!("Comment {} on {}", index, repo),
            permalink: format!(
                "https://gitlab.com/{}/-/merge_requests/3#note_{}",
                repo, index
            ),
            repository: repo.to_string(),
            platform: Platform::Gitlab,
            thread_type: ThreadType::MergeRequests,
            context_id: 3,
            comment_text: format!("Body {}", index),
            author: "alice".to_string(),
            avatar: "https://gitlab.com/avatar.png".to_string(),
            timestamp: "2026-08-07T10:00:00Z".to_string(),
        })
        .collect()
}

/// Strategy for a small repository-keyed mapping with unique permalinks.
fn arb_storage() -> impl Strategy<Value = BookmarkStorage> {
    proptest::collection::btree_map("[a-z]{2,8}/[a-z]{2,8}", 1u8..5, 1..4).prop_map(|repos| {
        repos
            .into_iter()
            .map(|(repo, count)| {
                let list = make_list(&repo, count);
                (repo, list)
            })
            .collect::<BTreeMap<_, _>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // *For any* mapping, serializing and deserializing yields an equal
    // mapping.
    #[test]
    fn mapping_round_trips_through_serde(storage in arb_storage()) {
        let json = serde_json::to_string(&storage).expect("serialization should succeed");
        let parsed: BookmarkStorage =
            serde_json::from_str(&json).expect("deserialization should succeed");
        prop_assert_eq!(parsed, storage);
    }

    // *For any* mapping, exporting and importing into a fresh store
    // reproduces the mapping exactly.
    #[test]
    fn export_then_import_reproduces_the_store(storage in arb_storage()) {
        let document = export_bookmarks(&storage).expect("export should succeed");

        let backend = MemoryBackend::new();
        let mut store = BookmarkStore::new(&backend);
        let imported =
            import_bookmarks(&mut store, &document).expect("import should succeed");

        let total: usize = storage.values().map(Vec::len).sum();
        prop_assert_eq!(imported, total);
        prop_assert_eq!(store.get_bookmarks(), storage);
    }

    // *For any* mapping, importing the same document twice adds nothing
    // the second time.
    #[test]
    fn double_import_is_idempotent(storage in arb_storage()) {
        let document = export_bookmarks(&storage).expect("export should succeed");

        let backend = MemoryBackend::new();
        let mut store = BookmarkStore::new(&backend);
        import_bookmarks(&mut store, &document).expect("first import should succeed");
        let second = import_bookmarks(&mut store, &document).expect("second import should succeed");

        prop_assert_eq!(second, 0);
        prop_assert_eq!(store.get_bookmarks(), storage);
    }
}
