//! Token extraction module
//!
//! This module maps the delimited segments of one filename to tag values.

mod extractor;
mod tag_set;

pub use extractor::{Extraction, SkipReason, extract_tags};
pub use tag_set::TagSet;
