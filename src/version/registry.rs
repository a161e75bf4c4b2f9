//! Registry trait for fetching repository tags from a source-hosting service

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::RepositoryTags;

/// Trait for listing the tags of a remote repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches the tags of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository identifier (e.g., "mozilla/rust-components-swift")
    ///
    /// # Returns
    /// * `Ok(RepositoryTags)` - Tags in the order returned by the service
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<RepositoryTags, RegistryError>;
}
