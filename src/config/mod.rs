//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::constants::{config_files, defaults, output_formats};
use crate::core::error::Result;
use crate::core::types::{ReplacementRule, RewriteTable};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directory to traverse when no paths are given on the CLI
    pub root: Option<String>,

    /// File extensions to process
    pub file_types: Option<Vec<String>>,

    /// Ordered replacement rules; falls back to the built-in table
    pub rules: Option<Vec<ReplacementRule>>,

    /// Report without writing files back
    pub dry_run: Option<bool>,

    /// Output format (text, minimal, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from file, validating the result
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::ImportShiftError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::ImportShiftError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .importshift.toml in current directory
        if let Ok(config) = Self::load_from_file(config_files::FILE_NAME) {
            return config;
        }

        // Check parent directories (up to 3 levels)
        for i in 1..=config_files::PARENT_LOOKUP_LEVELS {
            let path = format!("{}{}", "../".repeat(i), config_files::FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }
        if let Some(ref rules) = cli_config.rules {
            self.rules = Some(rules.clone());
        }
        if cli_config.dry_run {
            self.dry_run = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// The extensions candidate files must carry
    pub fn file_types_as_set(&self) -> HashSet<String> {
        match self.file_types {
            Some(ref types) => types.iter().cloned().collect(),
            None => defaults::FILE_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Materialize the ordered replacement table for this run
    pub fn rewrite_table(&self) -> RewriteTable {
        match self.rules {
            Some(ref rules) => RewriteTable::new(rules.clone()),
            None => RewriteTable::builtin().clone(),
        }
    }

    /// The root directory used when the CLI names no paths
    pub fn root_dir(&self) -> &str {
        self.root.as_deref().unwrap_or(defaults::ROOT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref rules) = self.rules {
            if rules.is_empty() {
                return Err(crate::core::error::ImportShiftError::Config(
                    "Rule table is empty. Expected at least one [[rules]] entry.".to_string(),
                ));
            }
            for (i, rule) in rules.iter().enumerate() {
                if rule.old.is_empty() {
                    return Err(crate::core::error::ImportShiftError::Config(format!(
                        "Rule {} has an empty 'old' literal. An empty literal would match between every character.",
                        i + 1
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(crate::core::error::ImportShiftError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Filtering & rules
    pub file_types: Option<Vec<String>>,     // --include
    pub rules: Option<Vec<ReplacementRule>>, // --rule (repeatable, ordered)

    // Behavior
    pub dry_run: bool, // --dry-run

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.root, None);
        assert_eq!(config.root_dir(), "src");
        assert_eq!(config.rules, None);
        assert_eq!(config.rewrite_table(), RewriteTable::builtin().clone());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"root = \"app\"\n\
              file_types = [\"ts\"]\n\
              dry_run = true\n\n\
              [[rules]]\n\
              old = \"@/app/blog/\"\n\
              new = \"@/app/[locale]/blog/\"\n",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.root, Some("app".to_string()));
        assert_eq!(config.file_types, Some(vec!["ts".to_string()]));
        assert_eq!(config.dry_run, Some(true));

        let rules = config.rules.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].old, "@/app/blog/");
        assert_eq!(rules[0].new, "@/app/[locale]/blog/");

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_preserves_rule_order() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"[[rules]]\nold = \"b\"\nnew = \"c\"\n\n\
              [[rules]]\nold = \"a\"\nnew = \"b\"\n",
        )?;

        let config = Config::load_from_file(file.path())?;
        let rules = config.rules.unwrap();
        assert_eq!(rules[0].old, "b");
        assert_eq!(rules[1].old, "a");

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"invalid toml content [").unwrap();

        let result = Config::load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file_nonexistent() {
        let result = Config::load_from_file("/path/that/does/not/exist.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            dry_run: true,
            verbose: true,
            file_types: Some(vec!["mts".to_string()]),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.dry_run, Some(true));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.file_types, Some(vec!["mts".to_string()]));
    }

    #[test]
    fn test_config_merge_cli_rules_take_precedence() {
        let mut config = Config {
            rules: Some(vec![
                ReplacementRule::new("from-file", "x").unwrap(),
            ]),
            ..Default::default()
        };

        let cli_config = CliConfig {
            rules: Some(vec![ReplacementRule::new("from-cli", "y").unwrap()]),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.rules.unwrap()[0].old, "from-cli");
    }

    #[test]
    fn test_config_merge_preserves_unset_values() {
        let mut config = Config {
            root: Some("app".to_string()),
            dry_run: Some(false),
            ..Default::default()
        };

        let cli_config = CliConfig::default();
        config.merge_with_cli(&cli_config);

        assert_eq!(config.root, Some("app".to_string())); // Preserved
        assert_eq!(config.dry_run, Some(false)); // Preserved: flag not set
    }

    #[test]
    fn test_file_types_as_set_defaults() {
        let config = Config::default();
        let set = config.file_types_as_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("ts"));
        assert!(set.contains("tsx"));
        assert!(!set.contains("json"));
    }

    #[test]
    fn test_file_types_as_set_custom() {
        let config = Config {
            file_types: Some(vec!["ts".to_string(), "mts".to_string()]),
            ..Default::default()
        };

        let set = config.file_types_as_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("mts"));
        assert!(!set.contains("tsx"));
    }

    #[test]
    fn test_rewrite_table_custom_rules() {
        let config = Config {
            rules: Some(vec![ReplacementRule::new("a", "b").unwrap()]),
            ..Default::default()
        };

        let table = config.rewrite_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rules()[0].old, "a");
    }

    #[test]
    fn test_config_validation_empty_rule_table() {
        let config = Config {
            rules: Some(vec![]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_old_literal() {
        let config = Config {
            rules: Some(vec![ReplacementRule {
                old: String::new(),
                new: "something".to_string(),
            }]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_output_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_valid_config() -> Result<()> {
        let config = Config {
            root: Some("src".to_string()),
            file_types: Some(vec!["ts".to_string(), "tsx".to_string()]),
            rules: Some(vec![
                ReplacementRule::new("@/app/(main)/", "@/app/[locale]/(main)/").unwrap(),
            ]),
            output_format: Some(output_formats::JSON.to_string()),
            ..Default::default()
        };
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_config_load_from_file_with_validation() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"output_format = \"yaml\"")?; // Invalid config

        let result = Config::load_from_file(file.path());
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_cli_config_default() {
        let cli_config = CliConfig::default();
        assert_eq!(cli_config.file_types, None);
        assert!(cli_config.rules.is_none());
        assert!(!cli_config.dry_run);
        assert!(!cli_config.quiet);
        assert!(!cli_config.verbose);
        assert_eq!(cli_config.output_format, None);
        assert_eq!(cli_config.config_file, None);
        assert!(!cli_config.no_config);
    }
}
