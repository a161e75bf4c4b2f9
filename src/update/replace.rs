//! Verbatim token substitution
//!
//! Files are rewritten in place: no temp file, no backup. A crash between
//! truncate and write leaves the file damaged.

use std::path::Path;

use tracing::{debug, info};

use crate::update::UpdateError;

/// An old -> new token pair; skipped unless both sides are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: Option<String>,
    pub new: Option<String>,
}

impl Replacement {
    pub fn new(old: Option<&str>, new: Option<&str>) -> Self {
        Self {
            old: old.map(str::to_string),
            new: new.map(str::to_string),
        }
    }

    fn pair(&self) -> Option<(&str, &str)> {
        match (&self.old, &self.new) {
            (Some(old), Some(new)) if !old.is_empty() => Some((old.as_str(), new.as_str())),
            _ => None,
        }
    }
}

/// Apply replacements in order to `content`
pub fn replace_tokens(content: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .filter_map(Replacement::pair)
        .fold(content.to_string(), |data, (old, new)| data.replace(old, new))
}

/// Rewrite `path` with every applicable replacement
///
/// Returns `true` if the file content changed. The file is left untouched
/// when nothing matched.
pub fn apply_replacements(path: &Path, replacements: &[Replacement]) -> Result<bool, UpdateError> {
    let io_err = |source| UpdateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let data = std::fs::read_to_string(path).map_err(io_err)?;
    let updated = replace_tokens(&data, replacements);

    if updated == data {
        debug!("No tokens to replace in {}", path.display());
        return Ok(false);
    }

    std::fs::write(path, updated).map_err(io_err)?;
    info!("Updated {}", path.display());
    Ok(true)
}
