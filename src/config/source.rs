//! Validation of the source directory

use std::fs::read_dir;
use std::path::PathBuf;

use log::debug;
use shellexpand::tilde;

use crate::errors::{
    Result, directory_not_found_error, empty_directory_error, file_operation_error,
    not_a_directory_error,
};

/// Expands `~` in the given path and checks that it names a non-empty directory
///
/// # Errors
/// Returns an error if the path does not exist, is not a directory, or the
/// directory has no entries at all.
pub fn resolve_source_directory(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(tilde(raw).to_string());
    debug!("Resolving source directory: {}", path.display());

    if !path.exists() {
        return Err(directory_not_found_error(path));
    }

    if !path.is_dir() {
        return Err(not_a_directory_error(path));
    }

    let mut entries =
        read_dir(&path).map_err(|e| file_operation_error(e, path.clone(), "list"))?;
    if entries.next().is_none() {
        return Err(empty_directory_error(path));
    }

    Ok(path)
}
