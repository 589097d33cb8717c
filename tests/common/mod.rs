use std::fs;
use std::path::{Path, PathBuf};

use id3::{Tag, TagLike};

/// Bytes standing in for mp3 audio data
pub const AUDIO: [u8; 1024] = [0u8; 1024];

/// Creates an untagged file in the given directory and returns its path
pub fn create_file(directory: &Path, name: &str) -> PathBuf {
    let path = directory.join(name);
    fs::write(&path, AUDIO).expect("Failed to create test file");
    path
}

/// Reads the text of a frame from the tag of the file, if any
pub fn frame_text(path: &Path, id: &str) -> Option<String> {
    let tag = Tag::read_from_path(path).ok()?;
    tag.get(id)
        .and_then(|frame| frame.content().text())
        .map(str::to_string)
}

pub fn has_tag(path: &Path) -> bool {
    Tag::read_from_path(path).is_ok()
}
