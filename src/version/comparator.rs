//! Current-vs-remote version comparison
//!
//! The lexical comparator is plain string ordering. It misorders multi-digit
//! components ("v10" sorts before "v9"); [`SemanticComparator`] is the opt-in
//! alternative.

use std::cmp::Ordering;

use crate::config::Comparison;
use crate::version::semver::compare_semantic;

/// Trait for deciding whether the pinned version is behind the remote tag
pub trait VersionComparator: Send + Sync {
    /// True when `current` is strictly older than `remote`
    fn is_outdated(&self, current: &str, remote: &str) -> bool;
}

pub struct LexicalComparator;

impl VersionComparator for LexicalComparator {
    fn is_outdated(&self, current: &str, remote: &str) -> bool {
        current < remote
    }
}

/// Semantic ordering, falling back to lexical when either side does not parse
pub struct SemanticComparator;

impl VersionComparator for SemanticComparator {
    fn is_outdated(&self, current: &str, remote: &str) -> bool {
        match compare_semantic(current, remote) {
            Some(ordering) => ordering == Ordering::Less,
            None => LexicalComparator.is_outdated(current, remote),
        }
    }
}

pub fn comparator_for(comparison: Comparison) -> Box<dyn VersionComparator> {
    match comparison {
        Comparison::Lexical => Box::new(LexicalComparator),
        Comparison::Semantic => Box::new(SemanticComparator),
    }
}
