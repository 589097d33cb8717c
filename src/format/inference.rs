//! Guessing the filename format when none was given
//!
//! Two conventions are recognised: every file starting with the same
//! artist name, or files starting with an integer track number. Anything
//! else falls back to a title-only format for names without a delimiter,
//! and to no format at all otherwise.

use log::debug;

use crate::config::{FieldToken, FormatTemplate};

/// What the first delimited segment of every filename holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The first segment is the same for every file
    Artist,
    /// The first segment differs and is always an integer
    Trackno,
    /// No pattern found
    Unknown,
}

impl Classification {
    /// The token the first segment is bound to, if any
    pub fn token(&self) -> Option<FieldToken> {
        match self {
            Classification::Artist => Some(FieldToken::Artist),
            Classification::Trackno => Some(FieldToken::Trackno),
            Classification::Unknown => None,
        }
    }
}

/// Classifies the first segment of the given filename stems
///
/// Every stem must contain the delimiter exactly once, otherwise no pattern
/// is found. With `various_artists` set the first segment is assumed to be
/// the artist even if it differs between files.
pub fn classify_first_segment<S: AsRef<str>>(
    stems: &[S],
    delimiter: &str,
    various_artists: bool,
) -> Classification {
    if stems.is_empty() {
        return Classification::Unknown;
    }

    if stems
        .iter()
        .any(|stem| stem.as_ref().matches(delimiter).count() != 1)
    {
        debug!("Not every filename contains '{delimiter}' exactly once");
        return Classification::Unknown;
    }

    if various_artists {
        return Classification::Artist;
    }

    let first_segments: Vec<&str> = stems
        .iter()
        .filter_map(|stem| stem.as_ref().split(delimiter).next())
        .map(str::trim)
        .collect();

    if first_segments.windows(2).all(|pair| pair[0] == pair[1]) {
        return Classification::Artist;
    }

    if first_segments
        .iter()
        .all(|segment| segment.parse::<i64>().is_ok())
    {
        Classification::Trackno
    } else {
        debug!("First segments differ and are not all track numbers");
        Classification::Unknown
    }
}

/// Builds the format for one filename from the batch classification
///
/// A stem without the delimiter is read as a bare title. Otherwise the
/// classification decides between `<artist>` and `<trackno>` for the first
/// segment; `None` means the format cannot be resolved.
pub fn guess_template(
    stem: &str,
    delimiter: &str,
    classification: Classification,
) -> Option<FormatTemplate> {
    if !stem.contains(delimiter) {
        return Some(FormatTemplate::from_tokens(&[FieldToken::Title], delimiter));
    }

    classification
        .token()
        .map(|first| FormatTemplate::from_tokens(&[first, FieldToken::Title], delimiter))
}
