//! forgemark — bookmark engine for comment threads on software forges.
//!
//! Entry point: runs a sectioned console demo of every component against an
//! in-memory backend.

use std::sync::Mutex;

use forgemark::app::App;
use forgemark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use forgemark::message_handler::handle_message;
use forgemark::services::import_export;
use forgemark::services::platform_detector::PlatformDetector;
use forgemark::services::url_resolver::{self, UrlResolver};
use forgemark::storage::backend::MemoryBackend;
use forgemark::types::bookmark::Bookmark;
use forgemark::types::identity::{Platform, ThreadType};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 forgemark v{} — Demo Mode                 ║", env!("CARGO_PKG_VERSION"));
    println!("║        Comment bookmarks for software-forge threads          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_url_resolver();
    demo_platform_detector();
    demo_bookmark_store();
    demo_import_export();
    demo_message_handler();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 5 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// A comment-anchored sample bookmark for the demos.
fn sample_bookmark(id: &str, permalink: &str, timestamp: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: "Looks good, just one nit on naming".to_string(),
        permalink: permalink.to_string(),
        repository: "group/project".to_string(),
        platform: Platform::Gitlab,
        thread_type: ThreadType::MergeRequests,
        context_id: 123,
        comment_text: "Looks good, just one nit on naming the helper".to_string(),
        author: "reviewer".to_string(),
        avatar: "https://gitlab.com/uploads/avatar.png".to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn demo_url_resolver() {
    section("URL Resolver");

    let resolver = UrlResolver::new();

    let url = "https://gitlab.com/group/project/-/merge_requests/123#note_456";
    let identity = resolver.resolve(url).unwrap();
    println!("  {} ->", url);
    println!("    platform={:?} repository={} id={} sub_id={:?}",
        identity.platform, identity.repository, identity.id, identity.sub_id);

    let url = "https://github.com/user/repo/pull/789";
    let identity = resolver.resolve(url).unwrap();
    println!("  {} ->", url);
    println!("    platform={:?} type={:?} id={}", identity.platform, identity.thread_type, identity.id);

    let unsupported = "https://example.com/not/a/forge/url";
    println!("  {} -> {:?}", unsupported, resolver.resolve(unsupported));

    let title = url_resolver::generate_title(&"x".repeat(50), "fallback");
    println!("  Truncated title: {} ({} chars)", title, title.chars().count());
    println!("  ✓ UrlResolver OK");
    println!();
}

fn demo_platform_detector() {
    section("Platform Detector");

    let detector = PlatformDetector::with_defaults();
    for url in [
        "https://github.com/user/repo/issues/1",
        "https://gitlab.example.com/group/project",
        "https://todo.sr.ht/~user/tracker",
        "https://example.com/",
    ] {
        match detector.detect_url(url) {
            Some(config) => println!("  {} -> {}", url, config.name),
            None => println!("  {} -> (not a supported forge)", url),
        }
    }
    println!("  ✓ PlatformDetector OK");
    println!();
}

fn demo_bookmark_store() {
    section("Bookmark Store");

    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);

    let permalink = "https://gitlab.com/group/project/-/merge_requests/123#note_456";
    let first = sample_bookmark("1754000000000", permalink, "2026-08-07T10:00:00Z");
    println!("  Added: {}", store.add_bookmark(first).unwrap());

    let duplicate = sample_bookmark("1754000000001", permalink, "2026-08-07T10:00:05Z");
    println!("  Duplicate rejected: {}", !store.add_bookmark(duplicate).unwrap());

    let bookmarks = store.get_bookmarks();
    println!("  Repositories: {}, total bookmarks: {}",
        bookmarks.len(),
        bookmarks.values().flatten().count());

    store.remove_bookmark("group/project", "1754000000000").unwrap();
    println!("  After removal, repository keys: {}", store.get_bookmarks().len());
    println!("  ✓ BookmarkStore OK");
    println!();
}

fn demo_import_export() {
    section("Import / Export");

    let backend = MemoryBackend::new();
    let mut store = BookmarkStore::new(&backend);
    store
        .add_bookmark(sample_bookmark(
            "1754000000002",
            "https://gitlab.com/group/project/-/merge_requests/123#note_789",
            "2026-08-07T11:00:00Z",
        ))
        .unwrap();

    let document = import_export::export_bookmarks(&store.get_bookmarks()).unwrap();
    println!("  Exported {} bytes of JSON", document.len());

    let fresh_backend = MemoryBackend::new();
    let mut fresh_store = BookmarkStore::new(&fresh_backend);
    let imported = import_export::import_bookmarks(&mut fresh_store, &document).unwrap();
    println!("  Imported {} bookmark(s) into a fresh store", imported);
    println!("  ✓ Import/Export OK");
    println!();
}

fn demo_message_handler() {
    section("Message Handler");

    let app = Mutex::new(App::in_memory());

    let parsed = handle_message(
        &app,
        "url.parse",
        &serde_json::json!({"url": "https://github.com/user/repo/issues/42#issuecomment-7"}),
    )
    .unwrap();
    println!("  url.parse -> {}", parsed);

    let added = handle_message(
        &app,
        "bookmark.add",
        &serde_json::json!({"bookmark": sample_bookmark(
            "1754000000003",
            "https://github.com/user/repo/issues/42#issuecomment-7",
            "2026-08-07T12:00:00Z",
        )}),
    )
    .unwrap();
    println!("  bookmark.add -> {}", added);

    let checked = handle_message(
        &app,
        "bookmark.check",
        &serde_json::json!({"url": "https://github.com/user/repo/issues/42#issuecomment-7"}),
    )
    .unwrap();
    println!("  bookmark.check -> {}", checked);
    println!("  ✓ MessageHandler OK");
    println!();
}
