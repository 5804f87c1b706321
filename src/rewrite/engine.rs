use memchr::memmem;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::{ImportShiftError, Result};
use crate::core::types::{RewriteSummary, RewriteTable};
use crate::reporting::logging;
use crate::ui::output::UpdateReporter;

pub trait RewriteFiles {
    fn rewrite_files(
        &self,
        paths: Vec<&Path>,
        reporter: Option<&UpdateReporter>,
    ) -> Result<RewriteSummary>;
}

/// Applies an ordered replacement table to candidate files.
///
/// Files are processed one at a time, fully in memory. The first fault
/// aborts the run; files rewritten before the fault stay rewritten.
#[derive(Debug)]
pub struct Rewriter {
    table: RewriteTable,
    dry_run: bool,
}

impl RewriteFiles for Rewriter {
    fn rewrite_files(
        &self,
        paths: Vec<&Path>,
        reporter: Option<&UpdateReporter>,
    ) -> Result<RewriteSummary> {
        let mut summary = RewriteSummary {
            dry_run: self.dry_run,
            ..Default::default()
        };

        for path in paths {
            summary.files_scanned += 1;
            let changed = self.rewrite_file(path, reporter)?;
            logging::log_file_result(path, changed);
            if changed {
                summary.updated_files.push(path.to_path_buf());
            }
        }

        Ok(summary)
    }
}

impl Rewriter {
    pub fn new(table: RewriteTable, dry_run: bool) -> Self {
        Self { table, dry_run }
    }

    /// Apply every table rule in order over the same buffer.
    ///
    /// Rule N sees the output of rule N-1, so chained tables (where one
    /// rule's new literal equals a later rule's old literal) cascade.
    pub fn apply_rules(&self, content: &str) -> String {
        let mut buffer = content.to_string();

        for rule in self.table.rules() {
            // memmem prescan skips the allocating replace on the common
            // no-match path
            if memmem::find(buffer.as_bytes(), rule.old.as_bytes()).is_some() {
                buffer = buffer.replace(&rule.old, &rule.new);
            }
        }

        buffer
    }

    /// Read, transform, and conditionally rewrite one file.
    ///
    /// Returns whether the file content changed. The file is written back
    /// only when dirty, so untouched files see no mtime or permission churn.
    fn rewrite_file(&self, path: &Path, reporter: Option<&UpdateReporter>) -> Result<bool> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|_| ImportShiftError::Encoding(path.display().to_string()))?;

        let rewritten = self.apply_rules(&content);
        if rewritten == content {
            return Ok(false);
        }

        if let Some(reporter) = reporter {
            reporter.file_updated(path);
        }

        if !self.dry_run {
            write_atomic(path, &rewritten)?;
        }

        Ok(true)
    }
}

/// Replace `path` with `content` via a temp sibling file and rename, so the
/// original is only ever swapped for a complete new version.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
