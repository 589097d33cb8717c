//! Workflow engine
//!
//! This module contains the engine that runs the tagging pipeline.

use colored::Colorize;
use log::{debug, error, info, warn};

use crate::config::Configuration;
use crate::discovery::scan_mp3_files;
use crate::errors::Result;
use crate::extraction::{Extraction, extract_tags};
use crate::format::{Classification, check_consistency, classify_first_segment, guess_template};
use crate::logging::format_message;
use crate::tagging::write_tags;

use super::context::WorkflowContext;

/// Options for processing files
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Print the tags without writing them
    pub dry_run: bool,
    /// Log and count tag-writing failures instead of aborting the run
    pub continue_on_error: bool,
}

/// Tags the MP3 files of the configured source directory
///
/// This function runs the pipeline steps:
/// 1. List the MP3 files in sorted order
/// 2. Check that every filename follows the same naming scheme
/// 3. Without a format override, guess what the first segment holds
/// 4. Extract the tag values of each file and write them
///
/// Steps 1 to 3 finish before any file is touched. Skipped files are
/// logged and counted.
///
/// # Errors
/// Returns an error if the directory cannot be listed, the filenames are
/// inconsistent, or a tag cannot be written and `continue_on_error` is off.
pub fn tag_files(config: &Configuration, options: &ProcessingOptions) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.dry_run);

    let files = scan_mp3_files(config.source_dir())?;
    context.set_files_found(files.len());

    if files.is_empty() {
        warn!("No mp3 files found in {}", config.source_dir().display());
        return Ok(context);
    }

    check_consistency(&files, config.format(), config.delimiter())?;

    let classification = match config.format() {
        Some(format) => {
            debug!("Using format override: {format}");
            Classification::Unknown
        }
        None => {
            let stems: Vec<&str> = files.iter().map(|file| file.stem.as_str()).collect();
            let classification =
                classify_first_segment(&stems, config.delimiter(), config.various_artists());
            debug!("First segment classified as {classification:?}");
            classification
        }
    };

    info!(
        "Tagging {} files{}...",
        files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for file in &files {
        debug!("Processing file: {}", file.path.display());

        let guessed = match config.format() {
            Some(_) => None,
            None => guess_template(&file.stem, config.delimiter(), classification),
        };
        let template = config.format().or(guessed.as_ref());

        let tags = match extract_tags(file, template, config) {
            Extraction::Tags(tags) => tags,
            Extraction::Skip(reason) => {
                if reason.is_silent() {
                    debug!("{reason}: {}", file.filename);
                } else {
                    warn!("WARNING: {reason}: {}", file.filename);
                }
                context.increment_files_skipped();
                continue;
            }
        };

        let summary = tags.to_string();
        info!("{}", format_message(&summary, &summary.green().to_string()));

        if options.dry_run {
            context.increment_files_tagged();
            continue;
        }

        match write_tags(&file.path, &tags, config.preserve_tags()) {
            Ok(()) => context.increment_files_tagged(),
            Err(e) if options.continue_on_error => {
                error!("{e}");
                context.increment_errors();
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Finished: {} of {} files tagged, {} skipped, {} failed",
        context.stats.files_tagged,
        context.stats.files_found,
        context.stats.files_skipped,
        context.stats.errors
    );

    Ok(context)
}
