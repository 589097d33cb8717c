use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the tagging application
///
/// Every variant is fatal for the run. Files that are merely skipped are
/// reported through [`crate::extraction::Extraction`] instead.
#[derive(Debug)]
pub enum Error {
    /// The source directory does not exist
    DirectoryNotFound { path: PathBuf },
    /// The source path exists but is not a directory
    NotADirectory { path: PathBuf },
    /// The source directory has no entries at all
    EmptyDirectory { path: PathBuf },
    /// The format override uses tokens we do not know
    UnrecognizedTokens { tokens: Vec<String> },
    /// The delimiter cannot be used to split filenames
    InvalidDelimiter { delimiter: String, detail: String },
    /// The track number format is not a supported printf integer format
    InvalidTracknoFormat { format: String, detail: String },
    /// Filenames do not share the same number of delimiters
    InconsistentFilenames { filename: String, expected: usize, found: usize },
    /// A filename does not have as many delimiters as the format override
    FormatMismatch { filename: String, format: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error raised by the ID3 library while reading, removing or writing tags
    TagOperation {
        source: id3::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryNotFound { path } => write!(f, "{} not found", path.display()),
            Error::NotADirectory { path } => write!(f, "{} is not a directory", path.display()),
            Error::EmptyDirectory { path } => {
                write!(f, "No files found in {}", path.display())
            }
            Error::UnrecognizedTokens { tokens } => {
                write!(f, "Unrecognized tokens found in --format: {}", tokens.join(", "))
            }
            Error::InvalidDelimiter { delimiter, detail } => {
                write!(f, "Invalid delimiter '{delimiter}': {detail}")
            }
            Error::InvalidTracknoFormat { format, detail } => {
                write!(f, "Invalid track number format '{format}': {detail}")
            }
            Error::InconsistentFilenames {
                filename,
                expected,
                found,
            } => write!(
                f,
                "Filenames are not consistent: {filename} has {found} delimiters, expected {expected}"
            ),
            Error::FormatMismatch { filename, format } => {
                write!(f, "Format '{format}' does not match file: {filename}")
            }
            Error::FileOperation {
                path, operation, ..
            } => write!(f, "Failed to {} file: {}", operation, path.display()),
            Error::TagOperation {
                source,
                path,
                operation,
            } => write!(
                f,
                "Failed to {} tags of {}: {}",
                operation,
                path.display(),
                source
            ),
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => write!(f, "{message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::TagOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the tagging application
///
/// # Examples
/// ```
/// use tagmp3::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create an empty directory error
pub fn empty_directory_error(path: PathBuf) -> Error {
    Error::EmptyDirectory { path }
}

/// Helper function to create an unrecognized tokens error
pub fn unrecognized_tokens_error(tokens: Vec<String>) -> Error {
    Error::UnrecognizedTokens { tokens }
}

/// Helper function to create an invalid delimiter error
pub fn invalid_delimiter_error(delimiter: &str, detail: &str) -> Error {
    Error::InvalidDelimiter {
        delimiter: delimiter.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid track number format error
pub fn invalid_trackno_format_error(format: &str, detail: &str) -> Error {
    Error::InvalidTracknoFormat {
        format: format.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an inconsistent filenames error
pub fn inconsistent_filenames_error(filename: &str, expected: usize, found: usize) -> Error {
    Error::InconsistentFilenames {
        filename: filename.to_string(),
        expected,
        found,
    }
}

/// Helper function to create a format mismatch error
pub fn format_mismatch_error(filename: &str, format: &str) -> Error {
    Error::FormatMismatch {
        filename: filename.to_string(),
        format: format.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a tag operation error
pub fn tag_operation_error(err: id3::Error, path: PathBuf, operation: &str) -> Error {
    Error::TagOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_errors() {
        let path = PathBuf::from("/music/missing");

        let error_string = format!("{}", directory_not_found_error(path.clone()));
        assert_eq!(error_string, "/music/missing not found");

        let error_string = format!("{}", not_a_directory_error(path.clone()));
        assert_eq!(error_string, "/music/missing is not a directory");

        let error_string = format!("{}", empty_directory_error(path));
        assert_eq!(error_string, "No files found in /music/missing");
    }

    #[test]
    fn test_unrecognized_tokens_error() {
        let error = unrecognized_tokens_error(vec!["<band>".to_string(), "<disc>".to_string()]);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("<band>, <disc>"),
            "Error message should list every unrecognized token"
        );
    }

    #[test]
    fn test_inconsistent_filenames_error() {
        let error = inconsistent_filenames_error("a - b - c.mp3", 1, 2);

        let error_string = format!("{error}");
        assert!(error_string.contains("a - b - c.mp3"));
        assert!(error_string.contains("expected 1"));
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path.mp3");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path, "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path.mp3"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_tag_operation_error() {
        let id3_error = id3::Error::new(id3::ErrorKind::NoTag, "no tag");
        let error = tag_operation_error(id3_error, PathBuf::from("song.mp3"), "write");

        let error_string = format!("{error}");
        assert!(error_string.contains("Failed to write tags of song.mp3"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );
    }
}
