//! Lessonbook Configuration System
//!
//! Reads the TOML configuration shared by the database layer and whatever
//! service embeds it, applies `LESSONBOOK_*` environment overrides and
//! installs the logger.
//!
//! # Example
//!
//! ```rust,no_run
//! use lessonbook_config::{init_logging, Config};
//!
//! let path = Config::default_path().expect("No config directory");
//! let config = Config::load_with_env(&path).expect("Failed to load config");
//! init_logging(&config.logging).expect("Failed to install logger");
//!
//! println!("Database: {}", config.database.path.display());
//! ```

mod database_settings;
mod error;
mod loader;
mod logging;

pub use database_settings::{DatabaseSettings, MAX_POOL_SIZE};
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use loader::{ENV_DATABASE_MAX_CONNECTIONS, ENV_DATABASE_PATH, ENV_LOG_LEVEL};
pub use logging::{init_logging, LogLevel, LoggingConfig};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Database connection settings
    pub database: DatabaseSettings,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = self.database.validate();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            database: DatabaseSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_validate_reports_every_database_error() {
        let mut config = Config::default();
        config.database.path = PathBuf::new();
        config.database.max_connections = 0;

        let errors = config.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["database.path", "database.max_connections"]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[database]\nmax_connections = 2\n").unwrap();
        assert_eq!(config.database.max_connections, 2);
        assert!(config.database.enable_wal);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
