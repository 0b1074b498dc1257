use serde::{Deserialize, Serialize};

/// A forge platform recognized by the URL resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Gitlab,
    Github,
    Gitea,
    Bitbucket,
    Sourcehut,
    Azure,
}

impl Platform {
    /// Returns the lowercase tag used in stored bookmarks and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Gitlab => "gitlab",
            Platform::Github => "github",
            Platform::Gitea => "gitea",
            Platform::Bitbucket => "bitbucket",
            Platform::Sourcehut => "sourcehut",
            Platform::Azure => "azure",
        }
    }
}

/// The kind of thread a bookmark lives on.
///
/// GitLab epics are folded into `Issues`; the other platforms' review
/// flavors (pulls, pull-requests, patches) map to `MergeRequests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    MergeRequests,
    Issues,
}

/// Structured identity extracted from a forge page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlIdentity {
    pub platform: Platform,
    pub domain: String,
    pub repository: String,
    #[serde(rename = "type")]
    pub thread_type: ThreadType,
    pub id: u64,
    #[serde(rename = "subId", skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<u64>,
    pub permalink: String,
}
