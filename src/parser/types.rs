//! Lookup results for the local project files

use crate::parser::error::ReadError;

/// A pinned dependency from `Package.resolved`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPin {
    /// Package identity (e.g., "rust-components-swift")
    pub identity: String,
    /// Pinned version tag
    pub version: String,
    /// Pinned commit SHA
    pub revision: String,
}

/// Outcome of looking up a pin by identity
#[derive(Debug)]
pub enum PinLookup {
    Found(DependencyPin),
    NotFound,
    ReadError(ReadError),
}

#[cfg(test)]
impl PinLookup {
    /// `(version, revision)`, both None unless the pin was found
    pub fn version_and_revision(&self) -> (Option<&str>, Option<&str>) {
        match self {
            PinLookup::Found(pin) => (Some(&pin.version), Some(&pin.revision)),
            _ => (None, None),
        }
    }
}

/// Outcome of looking up a package requirement in the project file
#[derive(Debug)]
pub enum MinVersionLookup {
    Found(String),
    NotFound,
    ReadError(ReadError),
}

#[cfg(test)]
impl MinVersionLookup {
    pub fn version(&self) -> Option<&str> {
        match self {
            MinVersionLookup::Found(version) => Some(version),
            _ => None,
        }
    }
}
