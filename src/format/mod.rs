//! Format resolution module
//!
//! This module decides which format applies to the batch: it guesses one
//! when no override was given and checks that every filename fits.

mod consistency;
mod inference;

pub use consistency::{check_consistency, delimiter_count};
pub use inference::{Classification, classify_first_segment, guess_template};
