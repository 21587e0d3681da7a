//! Durable storage of the produced document.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::PublishError;

/// Write the calendar document to `path`, creating parent directories and
/// overwriting any previous feed.
pub fn publish_feed(path: &Path, document: &str) -> Result<(), PublishError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PublishError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, document).map_err(|source| PublishError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = document.len(), "feed published");
    Ok(())
}
