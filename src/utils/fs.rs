use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{FixupError, Result};

/// Read a file's contents as UTF-8
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| FixupError::io_error(e, path))
}

/// Replace a file's contents without ever leaving it truncated.
///
/// The content goes to a temp file in the same directory, is synced, and then
/// renamed over the target. Permissions of an existing target are kept.
pub fn write_file_atomic(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    debug!("Writing file atomically: {}", path.display());

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FixupError::io_error(e, dir))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| FixupError::io_error(e, temp.path()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| FixupError::io_error(e, temp.path()))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| FixupError::io_error(e, temp.path()))?;
    }

    temp.persist(path)
        .map_err(|e| FixupError::io_error(e.error, path))?;
    Ok(())
}

/// Copy `path` to `<name>.<timestamp>.bak` next to it and return the copy's path
pub fn create_backup(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            FixupError::io_error(
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
                path,
            )
        })?;

    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let mut backup = path.with_file_name(format!("{}.{}.bak", file_name, timestamp));
    let mut attempt = 1;
    while backup.exists() {
        backup = path.with_file_name(format!("{}.{}-{}.bak", file_name, timestamp, attempt));
        attempt += 1;
    }

    fs::copy(path, &backup).map_err(|e| FixupError::io_error(e, path))?;
    debug!("Backed up {} to {}", path.display(), backup.display());
    Ok(backup)
}

/// Calculate a hash for a string
pub fn calculate_string_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
