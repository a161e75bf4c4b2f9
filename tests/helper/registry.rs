//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use spm_pin_sync::version::error::RegistryError;
use spm_pin_sync::version::registry::TagRegistry;
use spm_pin_sync::version::types::{RemoteTag, RepositoryTags};

/// In-memory registry keyed by repository
pub struct MockRegistry {
    tags: HashMap<String, Vec<RemoteTag>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Tags in service order, newest first
    pub fn with_tags(mut self, repository: &str, tags: Vec<(&str, &str)>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter()
                .map(|(name, commit)| RemoteTag::new(name, commit))
                .collect(),
        );
        self
    }
}

#[async_trait]
impl TagRegistry for MockRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<RepositoryTags, RegistryError> {
        match self.tags.get(repository) {
            Some(tags) => Ok(RepositoryTags::new(tags.clone())),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}
