//! Remote tag fetching and version comparison
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│ Comparator  │
//! │ (fetch tags)│     │(pick newest)│     │ (outdated?) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for listing tags of a remote repository
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`resolver`]: Trait for choosing the newest tag from a tag list
//! - [`resolvers`]: Published-order and semantic-order resolvers
//! - [`comparator`]: Lexical and semantic current-vs-remote comparison
//! - [`error`]: Error types for registry operations
//! - [`semver`]: Shared semver utilities
//! - [`types`]: Common types like `RemoteTag`

pub mod comparator;
pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod resolvers;
pub mod semver;
pub mod types;
