//! Tag writing module
//!
//! This module applies extracted values to a file's ID3 tag.

mod writer;

pub use writer::{clear_tags, write_tags};
