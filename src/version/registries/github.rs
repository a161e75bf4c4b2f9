//! GitHub Tags API registry implementation

use std::time::Duration;

use crate::version::error::RegistryError;
use crate::version::registry::TagRegistry;
use crate::version::types::{RemoteTag, RepositoryTags};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default base URL for GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response item from GitHub Tags API
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
    commit: TagCommit,
}

#[derive(Debug, Deserialize)]
struct TagCommit {
    sha: String,
}

/// Registry implementation for GitHub Tags API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry against the given API base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("spm-pin-sync/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: 30,
            token: None,
        })
    }

    /// Number of tags requested per call (GitHub caps this at 100)
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Sends the token as a bearer credential; anonymous otherwise
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }
}

#[async_trait::async_trait]
impl TagRegistry for GitHubRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<RepositoryTags, RegistryError> {
        let url = format!(
            "{}/repos/{}/tags?per_page={}",
            self.base_url, repository, self.per_page
        );
        debug!("Fetching tags from {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        let quota_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && quota_exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let tags: Vec<Tag> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let tags = tags
            .into_iter()
            .map(|t| RemoteTag::new(t.name, t.commit.sha))
            .collect();

        Ok(RepositoryTags::new(tags))
    }
}
