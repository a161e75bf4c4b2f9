//! Semantic-order latest tag resolver

use crate::version::resolver::LatestTagResolver;
use crate::version::resolvers::{PublishedOrderResolver, find_semantic_max};
use crate::version::types::{RemoteTag, RepositoryTags};

/// Picks the semantically greatest tag, ignoring the service's ordering.
///
/// Falls back to the first listed tag when no tag parses as a version.
pub struct SemanticResolver;

impl LatestTagResolver for SemanticResolver {
    fn resolve_latest(&self, tags: &RepositoryTags) -> Option<RemoteTag> {
        find_semantic_max(&tags.names())
            .and_then(|name| tags.find(&name).cloned())
            .or_else(|| PublishedOrderResolver.resolve_latest(tags))
    }
}
