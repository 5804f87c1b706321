//! importshift - rewrite import-path prefixes across a source tree
//!
//! Walks the given files and directories, reads every file whose extension
//! matches the configured set, applies an ordered table of literal string
//! replacements, and writes a file back only when its content changed.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod rewrite;
pub mod ui;

// Re-export the primary API surface
pub use crate::core::error::{ImportShiftError, Result};
pub use crate::core::types::{ReplacementRule, RewriteSummary, RewriteTable};
pub use crate::rewrite::{RewriteFiles, Rewriter};
