//! Directory scanning functionality
//!
//! This module lists the MP3 files of the source directory in sorted order.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::constants::MP3_EXTENSION;
use crate::errors::{Result, file_operation_error, invalid_filename_error};
use crate::utils::is_hidden_file;

/// A candidate file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameEntry {
    /// The path to the file
    pub path: PathBuf,
    /// The filename including its extension
    pub filename: String,
    /// The filename without its extension
    pub stem: String,
    /// 1-based position of the file in the sorted listing
    pub position: usize,
}

impl FilenameEntry {
    /// Creates a new FilenameEntry from a path and its position in the listing
    ///
    /// # Errors
    /// Returns an error if the filename is missing or not valid unicode
    pub fn new(path: PathBuf, position: usize) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FilenameEntry {
            path,
            filename,
            stem,
            position,
        })
    }

    pub fn is_mp3(&self) -> bool {
        is_mp3(&self.path)
    }
}

/// Checks whether the path has an `.mp3` extension, ignoring case
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(MP3_EXTENSION))
}

/// Scans a directory for MP3 files
///
/// Hidden files, directories and files with other extensions are left out.
/// The result is sorted by filename and every entry knows its 1-based
/// position in that order.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_mp3_files(directory: &Path) -> Result<Vec<FilenameEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let mut paths: Vec<PathBuf> = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter(|path| is_mp3(path))
        .filter(|path| {
            let valid = path.file_name().and_then(|name| name.to_str()).is_some();
            if !valid {
                warn!("Skipping file with a non-unicode name: {}", path.display());
            }
            valid
        })
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let files = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| FilenameEntry::new(path, index + 1))
        .collect::<Result<Vec<FilenameEntry>>>()?;

    debug!("Found {} mp3 files in directory", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filename_entry() {
        let entry = FilenameEntry::new(PathBuf::from("/music/Alice - Song.v2.MP3"), 3).unwrap();

        assert_eq!(entry.filename, "Alice - Song.v2.MP3");
        assert_eq!(entry.stem, "Alice - Song.v2");
        assert_eq!(entry.position, 3);
        assert!(entry.is_mp3());
    }

    #[test]
    fn test_is_mp3() {
        assert!(is_mp3(Path::new("song.mp3")));
        assert!(is_mp3(Path::new("song.Mp3")));
        assert!(!is_mp3(Path::new("song.flac")));
        assert!(!is_mp3(Path::new("song.mp3.txt")));
        assert!(!is_mp3(Path::new("mp3")));
    }

    #[test]
    fn test_scan_sorts_and_filters() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b - Two.mp3"), b"data").unwrap();
        fs::write(root.join("a - One.MP3"), b"data").unwrap();
        fs::write(root.join("cover.jpg"), b"data").unwrap();
        fs::write(root.join(".hidden.mp3"), b"data").unwrap();
        fs::create_dir(root.join("folder.mp3")).unwrap();

        let files = scan_mp3_files(root).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a - One.MP3", "b - Two.mp3"]);
        assert_eq!(files[0].position, 1);
        assert_eq!(files[1].position, 2);
        assert_eq!(files[1].stem, "b - Two");
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let result = scan_mp3_files(&temp_dir.path().join("missing"));
        assert!(result.is_err());
    }
}
