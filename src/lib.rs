//! Tags mp3 files using their filenames
//!
//! Every file in the source directory must follow the same naming scheme,
//! e.g. `<artist> - <title>` or `<trackno> - <title>`. The scheme is either
//! given explicitly or guessed from the filenames, and the values found in
//! each filename are written to the file's ID3 tag.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod extraction;
pub mod format;
pub mod logging;
pub mod tagging;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        build_configuration, get_log_file, get_matches, get_processing_options, get_verbosity,
    };
    pub use crate::config::{Configuration, FieldToken, FormatTemplate};
    pub use crate::errors::{
        directory_not_found_error, empty_directory_error, generic_error,
        inconsistent_filenames_error, not_a_directory_error, unrecognized_tokens_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::extraction::{Extraction, SkipReason, TagSet};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, tag_files};
}
