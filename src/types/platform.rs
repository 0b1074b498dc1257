use serde::{Deserialize, Serialize};

use crate::types::identity::Platform;

/// Configuration describing how to recognize one forge platform by hostname.
///
/// `domains` entries are lowercase substrings matched against the page
/// hostname, so `"gitlab"` also covers self-hosted instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub platform: Platform,
    /// Human-readable display name.
    pub name: String,
    pub domains: Vec<String>,
}
