//! Database connection settings

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for the connection pool size
pub const MAX_POOL_SIZE: u32 = 64;

/// Settings used to open the content database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database file path (relative to the working directory if not absolute)
    pub path: PathBuf,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Enable Write-Ahead Logging
    pub enable_wal: bool,

    /// Create the database file if it doesn't exist
    pub create_if_missing: bool,

    /// Milliseconds a connection waits on a locked database before failing
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("lessonbook.db"),
            max_connections: 10,
            enable_wal: true,
            create_if_missing: true,
            busy_timeout_ms: 5_000,
        }
    }
}

impl DatabaseSettings {
    /// Checks the settings, returning one entry per rejected field
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.path.as_os_str().is_empty() {
            errors.push(ValidationError::new("database.path", "must not be empty"));
        }

        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            errors.push(ValidationError::new(
                "database.max_connections",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_POOL_SIZE, self.max_connections
                ),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DatabaseSettings::default().validate().is_empty());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let settings = DatabaseSettings {
            path: PathBuf::new(),
            ..Default::default()
        };
        let errors = settings.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "database.path");
    }

    #[test]
    fn test_pool_size_bounds() {
        let mut settings = DatabaseSettings::default();
        settings.max_connections = 0;
        assert_eq!(
            settings.validate()[0].message,
            "must be between 1 and 64, got 0"
        );

        settings.max_connections = MAX_POOL_SIZE;
        assert!(settings.validate().is_empty());

        settings.max_connections = MAX_POOL_SIZE + 1;
        assert_eq!(settings.validate().len(), 1);
    }
}
