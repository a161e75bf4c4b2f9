//! Tag sync pipeline
//!
//! One run walks a fixed sequence:
//!
//! ```text
//! fetch newest tag -> read pin -> read project requirement -> compare -> rewrite
//! ```
//!
//! Only the fetch is fatal. Unreadable local files are logged and end the run
//! as [`SyncOutcome::Skipped`].

use std::fmt;

use thiserror::Error;
use tracing::info;

use crate::config::SyncConfig;
use crate::parser::package_resolved::read_pin;
use crate::parser::pbxproj::read_min_version;
use crate::parser::types::{MinVersionLookup, PinLookup};
use crate::update::{Replacement, UpdateError, apply_replacements, write_marker};
use crate::version::comparator::comparator_for;
use crate::version::error::RegistryError;
use crate::version::registry::TagRegistry;
use crate::version::resolvers::resolver_for;
use crate::version::types::RemoteTag;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to fetch newest tag: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Why a run ended without comparing versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The project requirement could not be read
    MinVersionUnavailable,
    /// The lock file has no usable pin
    PinUnavailable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MinVersionUnavailable => write!(f, "project minimum version unavailable"),
            SkipReason::PinUnavailable => write!(f, "pinned version unavailable"),
        }
    }
}

/// Result of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The pin is not older than the remote tag
    UpToDate { current: String, remote: String },
    Skipped(SkipReason),
    /// Dry run: files would have been rewritten
    WouldUpdate { from: String, to: RemoteTag },
    Updated { from: String, to: RemoteTag },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compare only, never write
    pub dry_run: bool,
}

/// Fetch the repository's tags and pick the newest one
pub async fn fetch_newest_tag<R: TagRegistry + ?Sized>(
    registry: &R,
    config: &SyncConfig,
) -> Result<RemoteTag, RegistryError> {
    let tags = registry.fetch_tags(&config.repository).await?;
    if tags.is_empty() {
        return Err(RegistryError::NoTags(config.repository.clone()));
    }
    resolver_for(config.tag_order)
        .resolve_latest(&tags)
        .ok_or_else(|| RegistryError::NoTags(config.repository.clone()))
}

/// Run one sync against the files named in `config`
pub async fn run_sync<R: TagRegistry + ?Sized>(
    registry: &R,
    config: &SyncConfig,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    let remote = fetch_newest_tag(registry, config).await?;
    info!(
        "Newest tag of {} is {} ({})",
        config.repository, remote.name, remote.commit
    );

    let pin = read_pin(&config.lock_file, &config.package_identity);
    let min_version = read_min_version(&config.project_file, &config.package_reference_id);

    let MinVersionLookup::Found(min_version) = min_version else {
        info!("Skipping update: {}", SkipReason::MinVersionUnavailable);
        return Ok(SyncOutcome::Skipped(SkipReason::MinVersionUnavailable));
    };

    let PinLookup::Found(pin) = pin else {
        info!("Skipping update: {}", SkipReason::PinUnavailable);
        return Ok(SyncOutcome::Skipped(SkipReason::PinUnavailable));
    };

    info!(
        "Pinned {} at {} ({}), project requires {}",
        pin.identity, pin.version, pin.revision, min_version
    );

    if !comparator_for(config.comparison).is_outdated(&pin.version, &remote.name) {
        info!("{} is up to date", pin.version);
        return Ok(SyncOutcome::UpToDate {
            current: pin.version,
            remote: remote.name,
        });
    }

    if options.dry_run {
        info!("Dry run: would update {} to {}", pin.version, remote.name);
        return Ok(SyncOutcome::WouldUpdate {
            from: pin.version,
            to: remote,
        });
    }

    apply_replacements(
        &config.lock_file,
        &[
            Replacement::new(Some(pin.version.as_str()), Some(remote.name.as_str())),
            Replacement::new(Some(pin.revision.as_str()), Some(remote.commit.as_str())),
        ],
    )?;
    apply_replacements(
        &config.project_file,
        &[Replacement::new(Some(min_version.as_str()), Some(remote.name.as_str()))],
    )?;
    write_marker(&config.marker_file, &remote.name)?;

    info!("Updated {} from {} to {}", pin.identity, pin.version, remote.name);
    Ok(SyncOutcome::Updated {
        from: pin.version,
        to: remote,
    })
}
