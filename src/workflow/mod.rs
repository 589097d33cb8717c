//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, tag_files};
