use crate::config::Config;
use crate::core::constants::files;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective configuration for this run
pub fn log_config_info(config: &Config, rule_count: usize) {
    let root = config.root.as_deref().unwrap_or("src");
    let dry_run = config.dry_run.unwrap_or(false);

    info!("Configuration: root={root}, rules={rule_count}, dry_run={dry_run}");
    if let Some(ref file_types) = config.file_types {
        info!("File types: {}", file_types.join(", "));
    }
}

/// Log the candidate file list
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, candidates: &[P]) {
    info!("Scanning {file_count} candidate file(s)");
    for (i, file) in candidates
        .iter()
        .take(files::MAX_FILES_TO_DISPLAY)
        .enumerate()
    {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
    if file_count > files::MAX_FILES_TO_DISPLAY {
        debug!("  ... and {} more", file_count - files::MAX_FILES_TO_DISPLAY);
    }
}

/// Log a per-file rewrite result for debugging
pub fn log_file_result(path: &Path, changed: bool) {
    if changed {
        debug!("~ {} rewritten", path.display());
    } else {
        debug!("= {} unchanged", path.display());
    }
}

/// Log run completion
pub fn log_run_complete(files_scanned: usize, files_updated: usize, duration_ms: u128) {
    info!("Rewrite complete: {files_updated}/{files_scanned} file(s) updated ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
