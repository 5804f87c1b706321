use clap::{CommandFactory, Parser};
use importshift::config::{CliConfig, Config};
use importshift::discovery::path_utils::expand_paths;
use importshift::reporting::logging;
use importshift::rewrite::{RewriteFiles, Rewriter};
use importshift::ui::output::{self, OutputSettings, UpdateReporter};
use importshift::ui::{Cli, Commands, cli_to_config, print_completions};

use std::path::Path;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    // Handle the completions subcommand first
    if let Some(exit_code) = handle_completion_command(&cli) {
        std::process::exit(exit_code);
    }

    match run_importshift_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle subcommands and return an exit code if one was processed
pub fn handle_completion_command(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main rewrite logic extracted from main() for testing
pub fn run_importshift_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    let table = config.rewrite_table();
    logging::log_config_info(&config, table.len());

    // Expand input paths into the ordered candidate list
    let candidates = process_and_expand_paths(cli, &config)?;
    logging::log_file_info(candidates.len(), &candidates);

    // Rewrite, reporting each updated file as it is visited
    let dry_run = config.dry_run.unwrap_or(false);
    let rewriter = Rewriter::new(table, dry_run);
    let reporter = UpdateReporter::new(output_settings.should_report_files());

    let started = Instant::now();
    let paths: Vec<&Path> = candidates.iter().map(|p| p.as_path()).collect();
    let summary = rewriter
        .rewrite_files(paths, Some(&reporter))
        .inspect_err(|e| {
            logging::log_error("Rewrite run aborted", Some(e));
        })?;

    logging::log_run_complete(
        summary.files_scanned,
        summary.files_updated(),
        started.elapsed().as_millis(),
    );

    output::display_summary(&summary, &output_settings);

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(importshift::core::constants::output_formats::DEFAULT)
        .to_string();

    OutputSettings {
        quiet,
        verbose,
        output_format,
    }
}

/// Expand CLI paths (or the configured root) into candidate files
pub fn process_and_expand_paths(
    cli: &Cli,
    config: &Config,
) -> Result<Vec<std::path::PathBuf>, Box<dyn std::error::Error>> {
    let root = config.root_dir().to_string();
    let inputs: Vec<&str> = if cli.paths.is_empty() {
        vec![root.as_str()]
    } else {
        cli.paths.iter().map(String::as_str).collect()
    };

    let paths: Vec<&Path> = inputs.iter().map(Path::new).collect();
    let file_types = config.file_types_as_set();

    let candidates = expand_paths(paths, &file_types).inspect_err(|e| {
        logging::log_error("Could not expand file paths", Some(e));
    })?;

    Ok(candidates)
}
