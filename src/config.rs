use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Upstream repository whose tags are tracked
pub const DEFAULT_REPOSITORY: &str = "mozilla/rust-components-swift";

/// Package identity of the upstream repository in Package.resolved
pub const DEFAULT_PACKAGE_IDENTITY: &str = "rust-components-swift";

pub const DEFAULT_LOCK_FILE: &str =
    "Client.xcodeproj/project.xcworkspace/xcshareddata/swiftpm/Package.resolved";

pub const DEFAULT_PROJECT_FILE: &str = "Client.xcodeproj/project.pbxproj";

/// XCRemoteSwiftPackageReference object of rust-components-swift
pub const DEFAULT_PACKAGE_REFERENCE_ID: &str = "433F87D62788F34500693368";

pub const DEFAULT_MARKER_FILE: &str = "test-fixtures/newest_tag.txt";

/// Timeout for the tag request in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_TAGS_PER_PAGE: u32 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How the newest tag is picked from the fetched list
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TagOrder {
    /// First tag as listed by the service
    #[default]
    Published,
    /// Greatest tag by semantic version
    Semantic,
}

/// How the pinned version is compared against the remote tag
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Plain string ordering
    #[default]
    Lexical,
    /// Semantic version ordering, lexical when a side does not parse
    Semantic,
}

/// Run configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    pub repository: String,
    pub package_identity: String,
    pub lock_file: PathBuf,
    pub project_file: PathBuf,
    pub package_reference_id: String,
    pub marker_file: PathBuf,
    pub api_base_url: String,
    pub tag_order: TagOrder,
    pub comparison: Comparison,
    pub tags_per_page: u32,
    /// Request timeout in milliseconds
    pub request_timeout: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            package_identity: DEFAULT_PACKAGE_IDENTITY.to_string(),
            lock_file: PathBuf::from(DEFAULT_LOCK_FILE),
            project_file: PathBuf::from(DEFAULT_PROJECT_FILE),
            package_reference_id: DEFAULT_PACKAGE_REFERENCE_ID.to_string(),
            marker_file: PathBuf::from(DEFAULT_MARKER_FILE),
            api_base_url: crate::version::registries::github::DEFAULT_BASE_URL.to_string(),
            tag_order: TagOrder::default(),
            comparison: Comparison::default(),
            tags_per_page: DEFAULT_TAGS_PER_PAGE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl SyncConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout)
    }
}
