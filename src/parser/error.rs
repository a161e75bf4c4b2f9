//! Error type for reading local project files

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lock file is not valid JSON or does not match the expected schema
    #[error("Invalid lock file: {0}")]
    Json(#[from] serde_json::Error),

    /// The project file is not a valid property list
    #[error("Invalid syntax at line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
}
