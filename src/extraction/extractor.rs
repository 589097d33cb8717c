//! Extracting tag values from one filename

use std::fmt;

use crate::config::{Configuration, FieldToken, FormatTemplate};
use crate::discovery::FilenameEntry;
use crate::extraction::TagSet;

/// Why a file was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file does not have an `.mp3` extension
    NotMp3,
    /// No format could be guessed for the filename
    UnresolvedFormat,
    /// The format has no title token, or the title segment is empty
    NoTitle { format: String },
    /// The filename has fewer segments than the format
    MissingSegment { token: FieldToken },
}

impl SkipReason {
    /// Silent skips are not worth a warning
    pub fn is_silent(&self) -> bool {
        matches!(self, SkipReason::NotMp3)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotMp3 => write!(f, "Not an mp3 file"),
            SkipReason::UnresolvedFormat => write!(f, "Could not guess format for file"),
            SkipReason::NoTitle { format } => {
                write!(f, "No title found with format '{format}' for file")
            }
            SkipReason::MissingSegment { token } => {
                write!(f, "No segment for {token} in file")
            }
        }
    }
}

/// Outcome of extracting the tags of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Tags(TagSet),
    Skip(SkipReason),
}

/// Extracts the tag values of one file using the resolved format
///
/// Segments found in the filename win over the command-line overrides; the
/// overrides fill in fields whose token is not part of the format. Without a
/// `<trackno>` token the track number is guessed from the file's position
/// when `guess_trackno` is enabled.
pub fn extract_tags(
    entry: &FilenameEntry,
    template: Option<&FormatTemplate>,
    config: &Configuration,
) -> Extraction {
    match resolve_tags(entry, template, config) {
        Ok(tags) => Extraction::Tags(tags),
        Err(reason) => Extraction::Skip(reason),
    }
}

fn resolve_tags(
    entry: &FilenameEntry,
    template: Option<&FormatTemplate>,
    config: &Configuration,
) -> Result<TagSet, SkipReason> {
    if !entry.is_mp3() {
        return Err(SkipReason::NotMp3);
    }
    let template = template.ok_or(SkipReason::UnresolvedFormat)?;

    let segments: Vec<&str> = entry
        .stem
        .split(template.delimiter())
        .map(str::trim)
        .collect();
    let segment = |token| segment_value(template, &segments, token);
    let overrides = config.overrides();

    let title = segment(FieldToken::Title)?;
    if title.is_none() && !config.ignore_no_title() {
        return Err(SkipReason::NoTitle {
            format: template.as_str().to_string(),
        });
    }

    let trackno = if template.contains(FieldToken::Trackno) {
        segment(FieldToken::Trackno)?
    } else if config.guess_trackno() {
        Some(config.trackno_format().format(entry.position))
    } else {
        None
    };

    Ok(TagSet {
        title,
        artist: segment(FieldToken::Artist)?.or_else(|| overrides.artist.clone()),
        album: segment(FieldToken::Album)?.or_else(|| overrides.album.clone()),
        year: segment(FieldToken::Year)?.or_else(|| Some(overrides.year.to_string())),
        trackno,
        genre: overrides.genre.clone(),
    })
}

/// The trimmed segment bound to `token`, or `None` if the token is not in the
/// format or the segment is empty
fn segment_value(
    template: &FormatTemplate,
    segments: &[&str],
    token: FieldToken,
) -> Result<Option<String>, SkipReason> {
    let Some(index) = template.position(token) else {
        return Ok(None);
    };

    let value = segments
        .get(index)
        .ok_or(SkipReason::MissingSegment { token })?;

    Ok(if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    })
}
