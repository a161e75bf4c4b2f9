//! Package.resolved reader
//!
//! Swift Package Manager lock files (format versions 2 and 3) keep a flat
//! `pins` array keyed by package identity.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::parser::error::ReadError;
use crate::parser::types::{DependencyPin, PinLookup};

#[derive(Debug, Deserialize)]
struct PackageResolved {
    pins: Vec<Pin>,
}

#[derive(Debug, Deserialize)]
struct Pin {
    identity: String,
    state: PinState,
}

#[derive(Debug, Deserialize)]
struct PinState {
    /// Absent for branch- or revision-only pins
    version: Option<String>,
    revision: String,
}

/// Read the pin for `identity` from the lock file at `path`
///
/// Read and parse failures are logged and returned as [`PinLookup::ReadError`].
pub fn read_pin(path: &Path, identity: &str) -> PinLookup {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let err = ReadError::Io {
                path: path.to_path_buf(),
                source,
            };
            info!("Error reading pinned version: {}", err);
            return PinLookup::ReadError(err);
        }
    };

    match parse_pin(&content, identity) {
        Ok(Some(pin)) => {
            debug!(
                "Found pin {} at {} ({})",
                pin.identity, pin.version, pin.revision
            );
            PinLookup::Found(pin)
        }
        Ok(None) => {
            info!("No versioned pin for {} in {}", identity, path.display());
            PinLookup::NotFound
        }
        Err(err) => {
            info!("Error reading pinned version: {}", err);
            PinLookup::ReadError(err)
        }
    }
}

/// Find the first versioned pin whose identity matches
pub fn parse_pin(content: &str, identity: &str) -> Result<Option<DependencyPin>, ReadError> {
    let resolved: PackageResolved = serde_json::from_str(content)?;

    let Some(pin) = resolved.pins.into_iter().find(|p| p.identity == identity) else {
        return Ok(None);
    };

    let Some(version) = pin.state.version else {
        debug!("Pin {} has no version (branch pin)", pin.identity);
        return Ok(None);
    };

    Ok(Some(DependencyPin {
        identity: pin.identity,
        version,
        revision: pin.state.revision,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RESOLVED: &str = r#"{
  "pins" : [
    {
      "identity" : "glean-swift",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/mozilla/glean-swift",
      "state" : {
        "revision" : "fff111",
        "version" : "v60.0.0"
      }
    },
    {
      "identity" : "rust-components-swift",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/mozilla/rust-components-swift",
      "state" : {
        "revision" : "abc123",
        "version" : "v1.2.3"
      }
    },
    {
      "identity" : "snapkit",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/SnapKit/SnapKit",
      "state" : {
        "branch" : "main",
        "revision" : "999eee"
      }
    }
  ],
  "version" : 2
}"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_pin_returns_version_and_revision_for_identity() {
        let file = write_temp(RESOLVED);

        let lookup = read_pin(file.path(), "rust-components-swift");

        assert_eq!(
            lookup.version_and_revision(),
            (Some("v1.2.3"), Some("abc123"))
        );
        assert!(matches!(
            lookup,
            PinLookup::Found(DependencyPin { ref identity, .. }) if identity == "rust-components-swift"
        ));
    }

    #[test]
    fn read_pin_returns_not_found_for_unknown_identity() {
        let file = write_temp(RESOLVED);

        let lookup = read_pin(file.path(), "does-not-exist");

        assert!(matches!(lookup, PinLookup::NotFound));
        assert_eq!(lookup.version_and_revision(), (None, None));
    }

    #[test]
    fn read_pin_treats_branch_pin_as_not_found() {
        let file = write_temp(RESOLVED);

        let lookup = read_pin(file.path(), "snapkit");

        assert!(matches!(lookup, PinLookup::NotFound));
    }

    #[test]
    fn read_pin_returns_read_error_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let lookup = read_pin(&dir.path().join("Package.resolved"), "rust-components-swift");

        assert!(matches!(lookup, PinLookup::ReadError(ReadError::Io { .. })));
        assert_eq!(lookup.version_and_revision(), (None, None));
    }

    #[test]
    fn read_pin_returns_read_error_for_malformed_json() {
        let file = write_temp(r#"{"pins": [ {"identity": "#);

        let lookup = read_pin(file.path(), "rust-components-swift");

        assert!(matches!(lookup, PinLookup::ReadError(ReadError::Json(_))));
        assert_eq!(lookup.version_and_revision(), (None, None));
    }

    #[test]
    fn parse_pin_returns_error_for_unexpected_schema() {
        let result = parse_pin(r#"{"object": {"pins": []}}"#, "rust-components-swift");

        assert!(matches!(result, Err(ReadError::Json(_))));
    }

    #[test]
    fn parse_pin_returns_first_match_for_duplicate_identity() {
        let content = r#"{"pins": [
            {"identity": "a", "state": {"version": "1.0.0", "revision": "r1"}},
            {"identity": "a", "state": {"version": "2.0.0", "revision": "r2"}}
        ]}"#;

        let pin = parse_pin(content, "a").unwrap().unwrap();

        assert_eq!(pin.version, "1.0.0");
        assert_eq!(pin.revision, "r1");
    }
}
