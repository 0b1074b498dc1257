//! Platform detection by page hostname.
//!
//! Decides whether a page belongs to a supported forge before any URL
//! parsing happens. The platform table is an explicit configuration value
//! passed in at construction — there is no process-wide "currently detected
//! platform" state.

use url::Url;

use crate::types::identity::Platform;
use crate::types::platform::PlatformConfig;

/// Hostname-based platform detector over an ordered configuration list.
pub struct PlatformDetector {
    configs: Vec<PlatformConfig>,
}

impl PlatformDetector {
    /// Creates a detector over an explicit platform configuration list.
    /// Entries are tried in order; the first domain match wins.
    pub fn new(configs: Vec<PlatformConfig>) -> Self {
        Self { configs }
    }

    /// Creates a detector with the built-in platform table.
    pub fn with_defaults() -> Self {
        Self::new(default_configs())
    }

    /// Matches a page hostname against the configured domain substrings.
    /// Matching is case-insensitive, so self-hosted instances whose
    /// hostname embeds the product name are detected too.
    pub fn detect(&self, hostname: &str) -> Option<&PlatformConfig> {
        let hostname = hostname.to_lowercase();
        self.configs.iter().find(|config| {
            config
                .domains
                .iter()
                .any(|domain| hostname.contains(domain.as_str()))
        })
    }

    /// Extracts the host from a full URL and detects its platform.
    pub fn detect_url(&self, url: &str) -> Option<&PlatformConfig> {
        let parsed = Url::parse(url).ok()?;
        self.detect(parsed.host_str()?)
    }

    /// Returns the configuration for a specific platform, if present.
    pub fn config_for(&self, platform: Platform) -> Option<&PlatformConfig> {
        self.configs.iter().find(|config| config.platform == platform)
    }
}

impl Default for PlatformDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The built-in platform table: display names plus the hostname substrings
/// that identify each forge's hosted and self-hosted instances.
pub fn default_configs() -> Vec<PlatformConfig> {
    vec![
        PlatformConfig {
            platform: Platform::Gitlab,
            name: "GitLab".to_string(),
            domains: vec!["gitlab".to_string()],
        },
        PlatformConfig {
            platform: Platform::Github,
            name: "GitHub".to_string(),
            domains: vec!["github.com".to_string()],
        },
        PlatformConfig {
            platform: Platform::Gitea,
            name: "Gitea".to_string(),
            domains: vec!["gitea".to_string()],
        },
        PlatformConfig {
            platform: Platform::Bitbucket,
            name: "Bitbucket".to_string(),
            domains: vec!["bitbucket.org".to_string()],
        },
        PlatformConfig {
            platform: Platform::Sourcehut,
            name: "SourceHut".to_string(),
            domains: vec!["sr.ht".to_string()],
        },
        PlatformConfig {
            platform: Platform::Azure,
            name: "Azure DevOps".to_string(),
            domains: vec!["dev.azure.com".to_string(), "visualstudio.com".to_string()],
        },
    ]
}
