//! File discovery and path handling
//!
//! This module expands the input files and directories into the ordered
//! list of candidate files eligible for rewriting.

pub mod path_utils;

pub use path_utils::expand_paths;
