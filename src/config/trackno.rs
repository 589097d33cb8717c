//! printf-style formatting of guessed track numbers

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, invalid_trackno_format_error};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Number { zero_pad: bool, width: usize },
}

/// A validated format such as `%d`, `%02d` or `Track %3d`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracknoFormat {
    source: String,
    pieces: Vec<Piece>,
}

impl TracknoFormat {
    /// Parses a printf-style format holding exactly one integer conversion
    ///
    /// Supported conversions are `%d` and `%i` with an optional `0` flag and
    /// width. `%%` produces a literal percent sign.
    ///
    /// # Errors
    /// Returns an error for any other conversion, or if the number of integer
    /// conversions is not exactly one.
    pub fn parse(format: &str) -> Result<TracknoFormat> {
        static CONVERSION_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"%(?:(%)|(0)?([1-9][0-9]*)?[di])")
                .expect("Failed to compile regex pattern for CONVERSION_RE")
        });

        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut conversions = 0;
        let mut last_end = 0;

        for captures in CONVERSION_RE.captures_iter(format) {
            let whole = captures
                .get(0)
                .ok_or_else(|| invalid_trackno_format_error(format, "malformed conversion"))?;
            push_literal(format, &format[last_end..whole.start()], &mut literal)?;
            last_end = whole.end();

            if captures.get(1).is_some() {
                literal.push('%');
                continue;
            }

            let width = match captures.get(3) {
                Some(width) => width
                    .as_str()
                    .parse::<usize>()
                    .map_err(|_| invalid_trackno_format_error(format, "width is too large"))?,
                None => 0,
            };

            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Number {
                zero_pad: captures.get(2).is_some(),
                width,
            });
            conversions += 1;
        }

        push_literal(format, &format[last_end..], &mut literal)?;
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        if conversions != 1 {
            return Err(invalid_trackno_format_error(
                format,
                &format!("expected exactly one integer conversion, found {conversions}"),
            ));
        }

        Ok(TracknoFormat {
            source: format.to_string(),
            pieces,
        })
    }

    /// Formats a 1-based track number
    pub fn format(&self, number: usize) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.clone(),
                Piece::Number {
                    zero_pad: true,
                    width,
                } => format!("{number:0width$}", width = *width),
                Piece::Number {
                    zero_pad: false,
                    width,
                } => format!("{number:>width$}", width = *width),
            })
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for TracknoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn push_literal(format: &str, text: &str, literal: &mut String) -> Result<()> {
    if text.contains('%') {
        return Err(invalid_trackno_format_error(
            format,
            "only %d, %i and %% conversions are supported",
        ));
    }
    literal.push_str(text);
    Ok(())
}
