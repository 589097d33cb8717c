//! Workflow context
//!
//! This module defines the statistics collected while tagging a batch.

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of mp3 files found in the source directory
    pub files_found: usize,
    /// Number of files whose tags were written (or would be, in a dry run)
    pub files_tagged: usize,
    /// Number of files skipped
    pub files_skipped: usize,
    /// Number of files whose tags could not be written
    pub errors: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Whether tags are only printed, not written
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            stats: WorkflowStats::default(),
        }
    }

    pub fn set_files_found(&mut self, count: usize) {
        self.stats.files_found = count;
    }

    pub fn increment_files_tagged(&mut self) {
        self.stats.files_tagged += 1;
    }

    pub fn increment_files_skipped(&mut self) {
        self.stats.files_skipped += 1;
    }

    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
