//! URL identity resolution for forge comment pages.
//!
//! Turns an issue / merge-request / work-item URL into a structured
//! [`UrlIdentity`]. Matching is an ordered table of per-platform patterns;
//! the first structural match wins, so a URL that more than one forge could
//! claim always resolves to the earliest platform in the table. The resolver
//! is a pure string-to-structure transform — no I/O, no shared state.

use regex::{Captures, Regex};

use crate::types::identity::{Platform, ThreadType, UrlIdentity};

/// Number of characters of comment text used for a generated title.
///
/// Inherited compatibility constant — existing stores were built with it.
pub const TITLE_PREVIEW_CHARS: usize = 40;

/// Title used when neither comment text nor page context yields one.
pub const UNTITLED_FALLBACK: &str = "Untitled Bookmark";

/// Fields extracted by a platform matcher, minus the permalink.
struct ParsedFields {
    domain: String,
    repository: String,
    thread_type: ThreadType,
    id: u64,
    sub_id: Option<u64>,
}

type FieldMapper = fn(&Captures<'_>) -> Option<ParsedFields>;

/// One entry in the resolution table: platform tag, compiled pattern, and
/// the function mapping capture groups to identity fields.
struct Matcher {
    platform: Platform,
    pattern: Regex,
    map_fields: FieldMapper,
}

impl Matcher {
    fn apply(&self, url: &str) -> Option<UrlIdentity> {
        let caps = self.pattern.captures(url)?;
        let fields = (self.map_fields)(&caps)?;
        Some(UrlIdentity {
            platform: self.platform,
            domain: fields.domain,
            repository: fields.repository,
            thread_type: fields.thread_type,
            id: fields.id,
            sub_id: fields.sub_id,
            permalink: url.to_string(),
        })
    }
}

/// Resolves forge page URLs to structured identities.
///
/// Owns its compiled pattern table; construct once and share.
pub struct UrlResolver {
    matchers: Vec<Matcher>,
}

impl UrlResolver {
    /// Builds the resolver with its fixed-order platform table.
    pub fn new() -> Self {
        let matchers = vec![
            Matcher {
                platform: Platform::Gitlab,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/-?/(merge_requests|issues|epics)/(\d+)(?:#note_(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_gitlab,
            },
            Matcher {
                platform: Platform::Github,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/(issues|pull|discussions)/(\d+)(?:#issuecomment-(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_github,
            },
            Matcher {
                platform: Platform::Gitea,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/(issues|pulls)/(\d+)(?:#issuecomment-(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_gitea,
            },
            Matcher {
                platform: Platform::Bitbucket,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/(issues|pull-requests)/(\d+)(?:#comment-(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_bitbucket,
            },
            Matcher {
                platform: Platform::Sourcehut,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/(issues|patches)/(\d+)(?:#comment-(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_sourcehut,
            },
            Matcher {
                platform: Platform::Azure,
                pattern: Regex::new(
                    r"https?://(.*?)/([^/]+/[^/]+)/_workitems/edit/(\d+)(?:#comment-(\d+))?",
                )
                .expect("valid regex"),
                map_fields: map_azure,
            },
        ];
        Self { matchers }
    }

    /// Resolves a URL against all platform matchers in fixed order.
    ///
    /// Returns `None` for unsupported or malformed URLs — an expected
    /// outcome ("cannot bookmark this page"), not a fault.
    pub fn resolve(&self, url: &str) -> Option<UrlIdentity> {
        self.matchers.iter().find_map(|m| m.apply(url))
    }

    /// Resolves a URL against a single platform's matcher.
    pub fn resolve_platform(&self, platform: Platform, url: &str) -> Option<UrlIdentity> {
        self.matchers
            .iter()
            .filter(|m| m.platform == platform)
            .find_map(|m| m.apply(url))
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a mandatory numeric capture group. Overflow fails the whole match
/// rather than wrapping or producing a sentinel value.
fn capture_num(caps: &Captures<'_>, index: usize) -> Option<u64> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

/// Parses an optional numeric capture group. An absent group is `Some(None)`;
/// a present but unparseable group fails the whole match.
fn capture_sub_num(caps: &Captures<'_>, index: usize) -> Option<Option<u64>> {
    match caps.get(index) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

/// Shared mapper for the five platforms whose pattern captures
/// (domain, repository, kind, id, sub-id) in that group order.
fn map_standard(caps: &Captures<'_>, thread_type: fn(&str) -> ThreadType) -> Option<ParsedFields> {
    Some(ParsedFields {
        domain: caps.get(1)?.as_str().to_string(),
        repository: caps.get(2)?.as_str().to_string(),
        thread_type: thread_type(caps.get(3)?.as_str()),
        id: capture_num(caps, 4)?,
        sub_id: capture_sub_num(caps, 5)?,
    })
}

// Epics carry issue-style discussion threads, so they fold into Issues.
fn map_gitlab(caps: &Captures<'_>) -> Option<ParsedFields> {
    map_standard(caps, |kind| match kind {
        "merge_requests" => ThreadType::MergeRequests,
        _ => ThreadType::Issues,
    })
}

fn map_github(caps: &Captures<'_>) -> Option<ParsedFields> {
    map_standard(caps, |kind| match kind {
        "pull" => ThreadType::MergeRequests,
        _ => ThreadType::Issues,
    })
}

fn map_gitea(caps: &Captures<'_>) -> Option<ParsedFields> {
    map_standard(caps, |kind| match kind {
        "pulls" => ThreadType::MergeRequests,
        _ => ThreadType::Issues,
    })
}

fn map_bitbucket(caps: &Captures<'_>) -> Option<ParsedFields> {
    map_standard(caps, |kind| match kind {
        "pull-requests" => ThreadType::MergeRequests,
        _ => ThreadType::Issues,
    })
}

fn map_sourcehut(caps: &Captures<'_>) -> Option<ParsedFields> {
    map_standard(caps, |kind| match kind {
        "patches" => ThreadType::MergeRequests,
        _ => ThreadType::Issues,
    })
}

/// Azure work-item URLs have no kind segment; everything is an issue.
fn map_azure(caps: &Captures<'_>) -> Option<ParsedFields> {
    Some(ParsedFields {
        domain: caps.get(1)?.as_str().to_string(),
        repository: caps.get(2)?.as_str().to_string(),
        thread_type: ThreadType::Issues,
        id: capture_num(caps, 3)?,
        sub_id: capture_sub_num(caps, 4)?,
    })
}

/// Derives a display title from comment text, falling back to the page
/// context and finally to [`UNTITLED_FALLBACK`].
///
/// Truncation counts characters, not word boundaries; the preview is
/// whitespace-trimmed after truncation and `...` is appended only when the
/// original text exceeded [`TITLE_PREVIEW_CHARS`].
pub fn generate_title(comment_text: &str, context_title: &str) -> String {
    let preview: String = comment_text.chars().take(TITLE_PREVIEW_CHARS).collect();
    let preview = preview.trim();

    if !preview.is_empty() {
        let mut title = preview.to_string();
        if comment_text.chars().count() > TITLE_PREVIEW_CHARS {
            title.push_str("...");
        }
        return title;
    }

    if !context_title.is_empty() {
        return context_title.to_string();
    }
    UNTITLED_FALLBACK.to_string()
}

/// Makes a page URL unique enough to serve as a bookmark permalink.
///
/// A DOM-derived comment id becomes the fragment when the URL has none;
/// otherwise the caller-supplied timestamp is appended (`#t=` without an
/// existing fragment, `&t=` with one). Pure — the caller supplies `now_ms`.
pub fn unique_permalink(url: &str, comment_dom_id: Option<&str>, now_ms: i64) -> String {
    if let Some(id) = comment_dom_id {
        if !id.is_empty() && !url.contains('#') {
            return format!("{}#{}", url, id);
        }
    }

    let separator = if url.contains('#') { '&' } else { '#' };
    format!("{}{}t={}", url, separator, now_ms)
}
