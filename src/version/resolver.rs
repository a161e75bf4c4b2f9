//! Latest tag resolver trait
//!
//! Decides which entry of a repository's tag list counts as the "newest".

use crate::version::types::{RemoteTag, RepositoryTags};

/// Trait for picking the newest tag out of a fetched tag list
///
/// - Published order: trust the service (first item in the fetched list)
/// - Semantic: maximum by semantic version, ignoring service order
pub trait LatestTagResolver: Send + Sync {
    /// Determine the newest tag, or None if the list is empty
    fn resolve_latest(&self, tags: &RepositoryTags) -> Option<RemoteTag>;
}
