//! Readers for the local files that pin the dependency

pub mod error;
pub mod package_resolved;
pub mod pbxproj;
pub mod types;
