//! Fundamental data types for the rewrite pipeline

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::constants::defaults;

/// Errors that can occur when constructing a replacement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The old literal is empty, which would match between every character
    EmptyOldLiteral,
    /// A rule string was missing the `OLD=NEW` separator
    MissingSeparator,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyOldLiteral => write!(f, "rule has an empty old literal"),
            RuleError::MissingSeparator => write!(f, "rule is missing the 'OLD=NEW' separator"),
        }
    }
}

impl std::error::Error for RuleError {}

/// One literal substitution: every occurrence of `old` becomes `new`.
///
/// Replacement is exact substring matching, never a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub old: String,
    pub new: String,
}

impl ReplacementRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Result<Self, RuleError> {
        let old = old.into();
        if old.is_empty() {
            return Err(RuleError::EmptyOldLiteral);
        }
        Ok(Self {
            old,
            new: new.into(),
        })
    }
}

impl FromStr for ReplacementRule {
    type Err = RuleError;

    /// Parse a rule in `OLD=NEW` form. The first `=` splits the pair, so the
    /// new literal may itself contain `=` but the old literal may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (old, new) = s.split_once('=').ok_or(RuleError::MissingSeparator)?;
        Self::new(old, new)
    }
}

/// An ordered table of replacement rules.
///
/// Rules are applied sequentially to the same buffer: rule N operates on the
/// output of rule N-1. The order is part of the contract and is never
/// changed, deduplicated, or parallelized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTable {
    rules: Vec<ReplacementRule>,
}

static BUILTIN_TABLE: Lazy<RewriteTable> = Lazy::new(|| {
    let rules = defaults::RULES
        .iter()
        .map(|(old, new)| ReplacementRule {
            old: (*old).to_string(),
            new: (*new).to_string(),
        })
        .collect();
    RewriteTable { rules }
});

impl RewriteTable {
    pub fn new(rules: Vec<ReplacementRule>) -> Self {
        Self { rules }
    }

    /// The built-in table relocating `@/app/...` imports under `[locale]`
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Outcome of one rewrite run, with updated files in visit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Number of candidate files read and scanned
    pub files_scanned: usize,

    /// Files whose content changed, in the order they were visited
    pub updated_files: Vec<PathBuf>,

    /// Whether on-disk writes were skipped
    pub dry_run: bool,
}

impl RewriteSummary {
    pub fn files_updated(&self) -> usize {
        self.updated_files.len()
    }
}
