//! Latest tag resolvers

mod published;
mod semantic;

pub use published::PublishedOrderResolver;
pub use semantic::SemanticResolver;

use crate::config::TagOrder;
use crate::version::resolver::LatestTagResolver;
use crate::version::semver::parse_version;

/// Find the semantically maximum version from a list
///
/// Handles both `v`-prefixed (e.g., "v1.0.0") and non-prefixed versions.
/// Invalid versions are skipped.
pub fn find_semantic_max(versions: &[String]) -> Option<String> {
    versions
        .iter()
        .filter_map(|v| parse_version(v).map(|parsed| (v, parsed)))
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(original, _)| original.clone())
}

pub fn resolver_for(order: TagOrder) -> Box<dyn LatestTagResolver> {
    match order {
        TagOrder::Published => Box::new(PublishedOrderResolver),
        TagOrder::Semantic => Box::new(SemanticResolver),
    }
}
