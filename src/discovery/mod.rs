//! File discovery module
//!
//! This module contains components for scanning the source directory.

mod scanner;

pub use scanner::{FilenameEntry, is_mp3, scan_mp3_files};
