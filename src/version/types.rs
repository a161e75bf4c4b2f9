//! Common types for remote tag data

/// A tag as listed by the source-hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTag {
    /// Tag name (e.g., "v119.0.20230814050322")
    pub name: String,
    /// Commit SHA the tag points at
    pub commit: String,
}

impl RemoteTag {
    pub fn new(name: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit: commit.into(),
        }
    }
}

/// Tags of a repository, in the order returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryTags {
    pub tags: Vec<RemoteTag>,
}

impl RepositoryTags {
    pub fn new(tags: Vec<RemoteTag>) -> Self {
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names in service order
    pub fn names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&RemoteTag> {
        self.tags.iter().find(|t| t.name == name)
    }
}
