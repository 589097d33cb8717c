//! Write the extracted values into a file's ID3 tag.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike, Version};
use log::{debug, trace};

use crate::errors::{Result, tag_operation_error};
use crate::extraction::TagSet;

/// Helper: set a plain text frame (T***) when a value is present
fn set_text_opt(tag: &mut Tag, id: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|value| !value.is_empty()) {
        tag.set_text(id, value);
    }
}

/// Removes every ID3v2 and ID3v1 tag from the file
///
/// A file without tags is left as it is.
pub fn clear_tags(path: &Path) -> Result<()> {
    let removed_v2 = Tag::remove_from_path(path)
        .map_err(|e| tag_operation_error(e, path.to_path_buf(), "remove"))?;
    let removed_v1 = id3::v1::Tag::remove_from_path(path)
        .map_err(|e| tag_operation_error(e, path.to_path_buf(), "remove"))?;

    debug!(
        "Cleared tags of {} (ID3v2: {removed_v2}, ID3v1: {removed_v1})",
        path.display()
    );

    Ok(())
}

/// Reads the file's tag, or starts a new one if the file has none
fn read_or_create(path: &Path) -> Result<Tag> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
            trace!("No tag in {}, creating one", path.display());
            Ok(Tag::new())
        }
        Err(e) => Err(tag_operation_error(e, path.to_path_buf(), "read")),
    }
}

/// Writes the values of `tags` into the file at `path`
///
/// Existing tags are wiped first unless `preserve_tags` is set. Fields
/// without a value are not written.
///
/// # Errors
/// Returns an error if the tag cannot be read, removed or saved
pub fn write_tags(path: &Path, tags: &TagSet, preserve_tags: bool) -> Result<()> {
    if !preserve_tags {
        clear_tags(path)?;
    }

    let mut tag = read_or_create(path)?;

    set_text_opt(&mut tag, "TPE1", &tags.artist); // artist
    set_text_opt(&mut tag, "TALB", &tags.album); // album
    set_text_opt(&mut tag, "TIT2", &tags.title); // title
    set_text_opt(&mut tag, "TDRC", &tags.year); // recording time
    set_text_opt(&mut tag, "TRCK", &tags.trackno); // track number, kept as written
    set_text_opt(&mut tag, "TCON", &tags.genre); // genre

    tag.write_to_path(path, Version::Id3v24)
        .map_err(|e| tag_operation_error(e, path.to_path_buf(), "write"))?;

    debug!("Wrote tags to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn text(tag: &Tag, id: &str) -> Option<String> {
        tag.get(id)
            .and_then(|frame| frame.content().text())
            .map(str::to_string)
    }

    #[test]
    fn test_write_to_untagged_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("Alice - Song.mp3");
        fs::write(&path, [0xFFu8, 0xFB, 0x90, 0x00].repeat(256)).unwrap();

        let tags = TagSet {
            title: Some("Song".to_string()),
            artist: Some("Alice".to_string()),
            year: Some("2001".to_string()),
            trackno: Some("01".to_string()),
            genre: Some("Rock".to_string()),
            ..TagSet::default()
        };
        write_tags(&path, &tags, false).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.title(), Some("Song"));
        assert_eq!(tag.artist(), Some("Alice"));
        assert_eq!(tag.album(), None);
        assert_eq!(text(&tag, "TRCK").as_deref(), Some("01"));
        assert_eq!(text(&tag, "TDRC").as_deref(), Some("2001"));
        assert_eq!(text(&tag, "TCON").as_deref(), Some("Rock"));
    }

    #[test]
    fn test_existing_tags_are_wiped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("song.mp3");
        fs::write(&path, [0u8; 1024]).unwrap();

        let mut old = Tag::new();
        old.set_album("Old Album");
        old.set_title("Old Title");
        old.write_to_path(&path, Version::Id3v24).unwrap();

        let tags = TagSet {
            title: Some("New Title".to_string()),
            ..TagSet::default()
        };
        write_tags(&path, &tags, false).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.title(), Some("New Title"));
        assert_eq!(tag.album(), None);
    }

    #[test]
    fn test_existing_tags_are_preserved() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("song.mp3");
        fs::write(&path, [0u8; 1024]).unwrap();

        let mut old = Tag::new();
        old.set_album("Old Album");
        old.set_title("Old Title");
        old.write_to_path(&path, Version::Id3v24).unwrap();

        let tags = TagSet {
            title: Some("New Title".to_string()),
            ..TagSet::default()
        };
        write_tags(&path, &tags, true).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.title(), Some("New Title"));
        assert_eq!(tag.album(), Some("Old Album"));
    }

    #[test]
    fn test_clear_tags_without_tags() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("song.mp3");
        fs::write(&path, [0u8; 1024]).unwrap();

        assert!(clear_tags(&path).is_ok());
        assert_eq!(fs::read(&path).unwrap().len(), 1024);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.mp3");

        let result = write_tags(&path, &TagSet::default(), false);
        assert!(result.is_err());
    }
}
