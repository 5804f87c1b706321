// Command-line interface definitions and parsing for importshift

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use crate::core::error::{ImportShiftError, Result};
use crate::core::types::ReplacementRule;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files or directories to rewrite (default: the configured root)
    pub paths: Vec<String>,

    // Core Options
    /// Report files that would change without writing them
    #[arg(short = 'n', long, help_heading = "Core Options")]
    pub dry_run: bool,

    // Filtering & Rules
    /// File extensions to process (e.g., ts,tsx)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering & Rules")]
    pub include: Option<String>,

    /// Replacement rule as OLD=NEW (repeatable, applied in the order given)
    #[arg(long, value_name = "OLD=NEW", help_heading = "Filtering & Rules")]
    pub rule: Vec<String>,

    // Output & Verbosity
    /// Suppress per-file output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completions", arg_required_else_help = true)]
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into a CliConfig structure
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let mut cli_config = CliConfig {
        dry_run: cli.dry_run,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        ..Default::default()
    };

    if let Some(ref include_str) = cli.include {
        cli_config.file_types = Some(
            include_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        );
    }

    if !cli.rule.is_empty() {
        let mut rules = Vec::with_capacity(cli.rule.len());
        for raw in &cli.rule {
            let rule: ReplacementRule = raw.parse().map_err(|e| {
                ImportShiftError::InvalidArgument(format!("--rule '{raw}': {e}"))
            })?;
            rules.push(rule);
        }
        cli_config.rules = Some(rules);
    }

    Ok(cli_config)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("importshift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = parse(&[]);
        assert!(cli.paths.is_empty());
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.format, None);
        assert!(cli.rule.is_empty());
    }

    #[test]
    fn test_cli_paths_and_flags() {
        let cli = parse(&["src", "lib", "--dry-run", "-q"]);
        assert_eq!(cli.paths, vec!["src".to_string(), "lib".to_string()]);
        assert!(cli.dry_run);
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["importshift", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_to_config__include_split_on_comma() {
        let cli = parse(&["--include", "ts, tsx,mts"]);
        let cli_config = cli_to_config(&cli).unwrap();
        assert_eq!(
            cli_config.file_types,
            Some(vec![
                "ts".to_string(),
                "tsx".to_string(),
                "mts".to_string()
            ])
        );
    }

    #[test]
    fn test_cli_to_config__rules_keep_argument_order() {
        let cli = parse(&["--rule", "b=c", "--rule", "a=b"]);
        let cli_config = cli_to_config(&cli).unwrap();

        let rules = cli_config.rules.unwrap();
        assert_eq!(rules[0].old, "b");
        assert_eq!(rules[0].new, "c");
        assert_eq!(rules[1].old, "a");
        assert_eq!(rules[1].new, "b");
    }

    #[test]
    fn test_cli_to_config__invalid_rule() {
        let cli = parse(&["--rule", "missing-separator"]);
        let result = cli_to_config(&cli);

        match result {
            Err(ImportShiftError::InvalidArgument(msg)) => {
                assert!(msg.contains("missing-separator"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_to_config__empty_old_literal_rule() {
        let cli = parse(&["--rule", "=new"]);
        assert!(cli_to_config(&cli).is_err());
    }

    #[test]
    fn test_cli_to_config__no_rules_leaves_none() {
        let cli = parse(&["src"]);
        let cli_config = cli_to_config(&cli).unwrap();
        assert!(cli_config.rules.is_none());
    }

    #[test]
    fn test_cli_completions_subcommand() {
        let cli = parse(&["completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Bash
            })
        ));
    }
}
