use std::fmt;

/// Error types for importshift operations
#[derive(Debug)]
pub enum ImportShiftError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// File content is not valid UTF-8
    Encoding(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for ImportShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportShiftError::Io(err) => write!(f, "IO error: {err}"),
            ImportShiftError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ImportShiftError::Encoding(path) => {
                write!(f, "Encoding error: '{path}' is not valid UTF-8")
            }
            ImportShiftError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ImportShiftError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ImportShiftError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for ImportShiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportShiftError::Io(err) => Some(err),
            ImportShiftError::TomlParsing(err) => Some(err),
            ImportShiftError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportShiftError {
    fn from(err: std::io::Error) -> Self {
        ImportShiftError::Io(err)
    }
}

impl From<toml::de::Error> for ImportShiftError {
    fn from(err: toml::de::Error) -> Self {
        ImportShiftError::TomlParsing(err)
    }
}

impl From<ignore::Error> for ImportShiftError {
    fn from(err: ignore::Error) -> Self {
        ImportShiftError::FileWalking(err)
    }
}

/// Type alias for Results using ImportShiftError
pub type Result<T> = std::result::Result<T, ImportShiftError>;
