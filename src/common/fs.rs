//! File system helpers
//!
//! Helpers for reading secret and credential files.

use std::fs;
use std::path::Path;
use log::debug;

use super::error::Result;

/// Check if a path points to an existing regular file
pub fn check_file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Read a whole file
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened or read.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Read a file if it exists, is readable and is not empty
///
/// Missing and unreadable files are both reported as `None`; the cause is
/// logged at debug level only.
pub fn read_non_empty(path: &Path) -> Option<Vec<u8>> {
    if !check_file_exists(path) {
        debug!("File {} does not exist", path.display());
        return None;
    }

    match read_file(path) {
        Ok(content) if content.is_empty() => {
            debug!("File {} is empty", path.display());
            None
        }
        Ok(content) => Some(content),
        Err(e) => {
            debug!("Cannot read file {}: {}", path.display(), e);
            None
        }
    }
}
