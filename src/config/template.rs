//! Filename format templates
//!
//! A template such as `<trackno> - <artist> - <title>` is split by the
//! delimiter into positional segments, each of which is either one of the
//! five field tokens or a literal that is ignored when extracting values.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{ALBUM_TOKEN, ARTIST_TOKEN, TITLE_TOKEN, TRACKNO_TOKEN, YEAR_TOKEN};
use crate::errors::{Result, invalid_delimiter_error, unrecognized_tokens_error};

/// A named placeholder in a filename format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldToken {
    Title,
    Artist,
    Album,
    Year,
    Trackno,
}

impl FieldToken {
    /// Every recognised token
    pub const ALL: [FieldToken; 5] = [
        FieldToken::Title,
        FieldToken::Artist,
        FieldToken::Year,
        FieldToken::Trackno,
        FieldToken::Album,
    ];

    /// The token as it is written in a format string, e.g. `<title>`
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldToken::Title => TITLE_TOKEN,
            FieldToken::Artist => ARTIST_TOKEN,
            FieldToken::Album => ALBUM_TOKEN,
            FieldToken::Year => YEAR_TOKEN,
            FieldToken::Trackno => TRACKNO_TOKEN,
        }
    }

    /// Looks up a token by its written form
    pub fn from_token(token: &str) -> Option<FieldToken> {
        FieldToken::ALL
            .into_iter()
            .find(|field| field.as_str() == token)
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of segments describing how to read a class of filenames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    text: String,
    delimiter: String,
    segments: Vec<Option<FieldToken>>,
}

impl FormatTemplate {
    /// Parses a user supplied format string
    ///
    /// The string is lower-cased first. Every `<...>` token must be one of the
    /// recognised field tokens.
    ///
    /// # Errors
    /// Returns an error listing the unrecognised tokens, or if the delimiter
    /// cannot be used to split the format.
    pub fn parse(format: &str, delimiter: &str) -> Result<FormatTemplate> {
        validate_delimiter(delimiter)?;
        let text = format.to_lowercase();
        validate_tokens(&text)?;

        let segments = text
            .split(delimiter)
            .map(|segment| FieldToken::from_token(segment.trim()))
            .collect();

        Ok(FormatTemplate {
            text,
            delimiter: delimiter.to_string(),
            segments,
        })
    }

    /// Builds a template directly from a list of tokens joined by the delimiter
    pub fn from_tokens(tokens: &[FieldToken], delimiter: &str) -> FormatTemplate {
        let text = tokens
            .iter()
            .map(FieldToken::as_str)
            .collect::<Vec<_>>()
            .join(delimiter);

        FormatTemplate {
            text,
            delimiter: delimiter.to_string(),
            segments: tokens.iter().copied().map(Some).collect(),
        }
    }

    /// The template as text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Number of delimiters a matching filename must contain
    pub fn delimiter_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Position of the first segment holding `token`, if any
    pub fn position(&self, token: FieldToken) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| *segment == Some(token))
    }

    pub fn contains(&self, token: FieldToken) -> bool {
        self.position(token).is_some()
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Checks that every `<...>` token in `format` is a recognised field token
///
/// # Errors
/// Returns an error listing the unrecognised tokens in alphabetical order
pub fn validate_tokens(format: &str) -> Result<()> {
    static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"<[a-z]+>").expect("Failed to compile regex pattern for TOKEN_RE")
    });

    let unrecognized: BTreeSet<String> = TOKEN_RE
        .find_iter(format)
        .map(|token| token.as_str())
        .filter(|token| FieldToken::from_token(token).is_none())
        .map(str::to_string)
        .collect();

    if unrecognized.is_empty() {
        Ok(())
    } else {
        Err(unrecognized_tokens_error(unrecognized.into_iter().collect()))
    }
}

/// Checks that the delimiter can split filenames without breaking tokens apart
pub fn validate_delimiter(delimiter: &str) -> Result<()> {
    if delimiter.is_empty() {
        return Err(invalid_delimiter_error(delimiter, "must not be empty"));
    }

    if let Some(token) = FieldToken::ALL
        .iter()
        .find(|token| token.as_str().contains(delimiter))
    {
        return Err(invalid_delimiter_error(
            delimiter,
            &format!("must not occur in the token {token}"),
        ));
    }

    Ok(())
}
