use crate::error::{Result, SetupError};
use std::path::Path;

/// Creates `path` and any missing parents. Succeeds if it is already a directory;
/// fails if something other than a directory is in the way.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| SetupError::from_io(e, path))
}

pub fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| SetupError::from_io(e, path))
}

/// Renames the directory `from` to `to`. Refuses to overwrite an existing `to`.
pub fn move_dir(from: &Path, to: &Path, expected_name: &str) -> Result<()> {
    if !from.is_dir() {
        return Err(SetupError::ArchiveLayout {
            dir_name: expected_name.to_string(),
        });
    }
    if to.exists() {
        return Err(SetupError::DestinationExists {
            path: to.to_path_buf(),
        });
    }

    std::fs::rename(from, to).map_err(|e| SetupError::from_io(e, to))
}
