//! Service-order latest tag resolver

use crate::version::resolver::LatestTagResolver;
use crate::version::types::{RemoteTag, RepositoryTags};

/// Trusts the service's ordering: the first listed tag is the newest.
///
/// GitHub does not document the order of the tags endpoint; in practice it
/// is newest-first for repositories that tag monotonically.
pub struct PublishedOrderResolver;

impl LatestTagResolver for PublishedOrderResolver {
    fn resolve_latest(&self, tags: &RepositoryTags) -> Option<RemoteTag> {
        tags.tags.first().cloned()
    }
}
