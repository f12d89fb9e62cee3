//! Errors raised while reading configuration or installing the logger

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but holds nothing; a missing file is not an error
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("Cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Invalid configuration: {}", list(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Environment variable {variable} has an unusable value '{value}'")]
    InvalidOverride { variable: String, value: String },

    #[error("No home directory to place the config file in")]
    NoConfigDirectory,

    #[error("Logger already installed: {0}")]
    LoggingError(#[from] log::SetLoggerError),
}

/// A single rejected setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the setting, e.g. `database.max_connections`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

fn list(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
