//! Marker file telling downstream automation which tag was applied

use std::path::Path;

use tracing::info;

use crate::update::UpdateError;

/// Create or truncate `path` and write `tag` followed by a newline
pub fn write_marker(path: &Path, tag: &str) -> Result<(), UpdateError> {
    let io_err = |source| UpdateError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    std::fs::write(path, format!("{}\n", tag)).map_err(io_err)?;
    info!("Wrote {} to {}", tag, path.display());
    Ok(())
}
