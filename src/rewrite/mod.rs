//! Literal-substitution rewriting of candidate files
//!
//! This module applies the ordered replacement table to each candidate
//! file and writes back only the files whose content changed.

pub mod engine;

pub use engine::{RewriteFiles, Rewriter};
