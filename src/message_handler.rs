//! Message dispatch for forgemark.
//!
//! The single entry point the host messaging surface routes through: an
//! action name plus JSON params, dispatched to the resolver, the detector,
//! or the bookmark store via the `App` struct. Kept free of any host
//! runtime so it can be unit-tested directly.

use std::sync::Mutex;

use chrono::Utc;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::services::import_export;
use crate::types::bookmark::Bookmark;

/// Dispatch a message to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Lookups that merely find nothing (`url.parse`, `platform.detect` on an
/// unsupported page) answer `Value::Null` rather than an error.
pub fn handle_message(app: &Mutex<App>, action: &str, params: &Value) -> Result<Value, String> {
    match action {
        // ─── Identity ───
        "url.parse" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            match app.resolver.resolve(url) {
                Some(identity) => serde_json::to_value(&identity).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }
        "platform.detect" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            match app.detector.detect_url(url) {
                Some(config) => Ok(json!({
                    "platform": config.platform,
                    "name": config.name,
                })),
                None => Ok(Value::Null),
            }
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let raw = params.get("bookmark").cloned().ok_or("missing bookmark")?;
            let bookmark: Bookmark =
                serde_json::from_value(raw).map_err(|e| format!("invalid bookmark: {}", e))?;
            let app = app.lock().map_err(|e| e.to_string())?;
            let mut store = app.store();
            let added = store.add_bookmark(bookmark).map_err(|e| e.to_string())?;
            Ok(json!({"added": added}))
        }
        "bookmark.remove" => {
            let repository = params
                .get("repository")
                .and_then(|v| v.as_str())
                .ok_or("missing repository")?;
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            let mut store = app.store();
            store.remove_bookmark(repository, id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.list" => {
            let app = app.lock().map_err(|e| e.to_string())?;
            let bookmarks = app.store().get_bookmarks();
            serde_json::to_value(&bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.check" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            let bookmarked = app.store().is_bookmarked(url);
            Ok(json!({"isBookmarked": bookmarked}))
        }
        "bookmark.update_title" => {
            let repository = params
                .get("repository")
                .and_then(|v| v.as_str())
                .ok_or("missing repository")?;
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let title = params.get("title").and_then(|v| v.as_str()).ok_or("missing title")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            let mut store = app.store();
            store
                .update_title(repository, id, title)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Import / export ───
        "bookmarks.export" => {
            let app = app.lock().map_err(|e| e.to_string())?;
            let bookmarks = app.store().get_bookmarks();
            let document =
                import_export::export_bookmarks(&bookmarks).map_err(|e| e.to_string())?;
            let file_name = import_export::export_file_name(Utc::now().date_naive());
            Ok(json!({"document": document, "fileName": file_name}))
        }
        "bookmarks.import" => {
            let document = params
                .get("document")
                .and_then(|v| v.as_str())
                .ok_or("missing document")?;
            let app = app.lock().map_err(|e| e.to_string())?;
            let mut store = app.store();
            let imported =
                import_export::import_bookmarks(&mut store, document).map_err(|e| e.to_string())?;
            Ok(json!({"imported": imported}))
        }

        _ => Err(format!("Unknown action: {}", action)),
    }
}
