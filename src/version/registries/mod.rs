//! Registry implementations for fetching repository tags

pub mod github;

pub use github::GitHubRegistry;
