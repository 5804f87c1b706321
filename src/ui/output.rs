//! Output formatting and display logic for importshift

use std::path::Path;

use crate::core::constants::output_formats;
use crate::core::types::RewriteSummary;

/// Settings for output formatting and display
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    /// Per-file `Updating` lines go to stdout for text and minimal formats
    pub fn should_report_files(&self) -> bool {
        !self.quiet && self.output_format != output_formats::JSON
    }

    /// The closing summary line is text-format only
    pub fn should_show_summary(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Prints one `Updating <path>` line per rewritten file, in visit order
#[derive(Debug)]
pub struct UpdateReporter {
    enabled: bool,
}

impl UpdateReporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn file_updated(&self, path: &Path) {
        if self.enabled {
            println!("Updating {}", path.display());
        }
    }
}

/// Display the final run results in the configured format
pub fn display_summary(summary: &RewriteSummary, settings: &OutputSettings) {
    if settings.output_format == output_formats::JSON {
        println!("{}", summary_json(summary));
        return;
    }

    if !settings.should_show_summary() {
        return;
    }

    if summary.files_updated() == 0 {
        println!(
            "No files needed updating ({} scanned)",
            summary.files_scanned
        );
    } else if summary.dry_run {
        println!(
            "Would update {} of {} file(s) (dry run, nothing written)",
            summary.files_updated(),
            summary.files_scanned
        );
    } else {
        println!(
            "Updated {} of {} file(s)",
            summary.files_updated(),
            summary.files_scanned
        );
    }
}

fn summary_json(summary: &RewriteSummary) -> String {
    let updated: Vec<String> = summary
        .updated_files
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    serde_json::json!({
        "files_scanned": summary.files_scanned,
        "files_updated": summary.files_updated(),
        "updated_files": updated,
        "dry_run": summary.dry_run,
    })
    .to_string()
}
