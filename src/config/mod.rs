//! Configuration module
//!
//! This module contains the run configuration, the filename format
//! templates and the validation of command-line supplied values.

mod model;
mod source;
mod template;
mod trackno;

pub use model::{Configuration, ConfigurationBuilder, Overrides, current_year};
pub use source::resolve_source_directory;
pub use template::{FieldToken, FormatTemplate, validate_delimiter, validate_tokens};
pub use trackno::TracknoFormat;
