//! In-place rewriting of the pinned files

pub mod marker;
pub mod replace;

pub use marker::write_marker;
pub use replace::{Replacement, apply_replacements, replace_tokens};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to update {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
