/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the default replacement table, default file types,
/// and other literal values used across the application.
/// Output format constants
pub mod output_formats {
    /// Text output format - per-file report lines plus a summary
    pub const TEXT: &str = "text";
    /// Minimal output format - per-file report lines only
    pub const MINIMAL: &str = "minimal";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, MINIMAL, JSON];
}

/// Default configuration values
pub mod defaults {
    /// Default root directory to traverse
    pub const ROOT: &str = "src";

    /// Default file extensions to process (TypeScript source and
    /// TypeScript-with-markup source)
    pub const FILE_TYPES: [&str; 2] = ["ts", "tsx"];

    /// Built-in replacement table: import-path prefixes relocated under the
    /// `[locale]` routing segment. Order matters and is applied as written.
    pub const RULES: [(&str, &str); 6] = [
        ("@/app/(main)/", "@/app/[locale]/(main)/"),
        ("@/app/trips/", "@/app/[locale]/trips/"),
        ("@/app/admin/", "@/app/[locale]/admin/"),
        ("@/app/auth/", "@/app/[locale]/auth/"),
        ("@/app/checkout/", "@/app/[locale]/checkout/"),
        ("@/app/login/", "@/app/[locale]/login/"),
    ];
}

/// Config file discovery constants
pub mod config_files {
    /// Config file name looked up in the current and parent directories
    pub const FILE_NAME: &str = ".importshift.toml";

    /// How many parent directories to probe for a config file
    pub const PARENT_LOOKUP_LEVELS: usize = 3;
}

/// File processing constants
pub mod files {
    /// Maximum files to display in config info before truncating
    pub const MAX_FILES_TO_DISPLAY: usize = 10;
}
