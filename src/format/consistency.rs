//! Batch-wide check that every filename follows the same naming scheme

use log::debug;

use crate::config::FormatTemplate;
use crate::discovery::FilenameEntry;
use crate::errors::{Result, format_mismatch_error, inconsistent_filenames_error};

/// Number of times `delimiter` occurs in `stem`
pub fn delimiter_count(stem: &str, delimiter: &str) -> usize {
    stem.matches(delimiter).count()
}

/// Verifies that every filename has the same number of delimiters
///
/// With an explicit format, that number must also match the format's own
/// delimiter count.
///
/// # Errors
/// Returns an error naming the first filename that does not fit
pub fn check_consistency(
    files: &[FilenameEntry],
    format: Option<&FormatTemplate>,
    delimiter: &str,
) -> Result<()> {
    let mut expected = format.map(FormatTemplate::delimiter_count);

    for file in files {
        let found = delimiter_count(&file.stem, delimiter);
        match (expected, format) {
            (Some(count), Some(format)) if count != found => {
                return Err(format_mismatch_error(&file.filename, format.as_str()));
            }
            (Some(count), None) if count != found => {
                return Err(inconsistent_filenames_error(&file.filename, count, found));
            }
            (Some(_), _) => {}
            (None, _) => expected = Some(found),
        }
    }

    debug!("All {} filenames are consistent", files.len());

    Ok(())
}
