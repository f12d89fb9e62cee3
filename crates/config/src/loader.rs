//! Reading the config file and applying environment overrides

use crate::{Config, ConfigError, ConfigResult, LogLevel, CONFIG_VERSION};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Overrides `database.path`
pub const ENV_DATABASE_PATH: &str = "LESSONBOOK_DATABASE_PATH";
/// Overrides `database.max_connections`
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "LESSONBOOK_DATABASE_MAX_CONNECTIONS";
/// Overrides `logging.level`
pub const ENV_LOG_LEVEL: &str = "LESSONBOOK_LOG_LEVEL";

const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Platform config file location, e.g. `~/.config/lessonbook/config.toml`
    pub fn default_path() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "lessonbook")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    /// Loads and validates the config at `path`
    ///
    /// A missing file yields the defaults. A file that exists must parse,
    /// carry a supported version and pass validation.
    pub fn load(path: &Path) -> ConfigResult<Config> {
        let config = Self::read(path)?;
        config.checked()
    }

    /// Like [`Config::load`], but falls back to the defaults on any error
    pub fn load_or_default(path: &Path) -> Config {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Loads the file, then applies `LESSONBOOK_*` variables from the process
    /// environment before validating
    pub fn load_with_env(path: &Path) -> ConfigResult<Config> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.checked()
    }

    /// Applies overrides found through `lookup`
    ///
    /// `lookup` resolves a variable name to its value. A value that does not
    /// parse is an error.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATABASE_PATH) {
            log::info!("Database path override: {}", path);
            self.database.path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_DATABASE_MAX_CONNECTIONS) {
            self.database.max_connections = value
                .trim()
                .parse()
                .map_err(|_| invalid_override(ENV_DATABASE_MAX_CONNECTIONS, &value))?;
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value
                .parse::<LogLevel>()
                .map_err(|_| invalid_override(ENV_LOG_LEVEL, &value))?;
            log::info!("Log level override: {}", self.logging.level);
        }

        Ok(())
    }

    fn read(path: &Path) -> ConfigResult<Config> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn checked(self) -> ConfigResult<Config> {
        self.validate().map_err(ConfigError::Invalid)?;
        Ok(self)
    }
}

fn invalid_override(variable: &str, value: &str) -> ConfigError {
    ConfigError::InvalidOverride {
        variable: variable.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_blank_file_is_rejected() {
        let (_temp_dir, path) = write_config("  \n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Empty { .. })
        ));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let (_temp_dir, path) = write_config("version = 2\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::UnsupportedVersion {
                found: 2,
                supported: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn test_load_or_default_swallows_parse_errors() {
        let (_temp_dir, path) = write_config("[database\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let vars = HashMap::from([
            (ENV_DATABASE_PATH, "/srv/lessonbook/content.db"),
            (ENV_DATABASE_MAX_CONNECTIONS, " 4 "),
            (ENV_LOG_LEVEL, "debug"),
        ]);

        let mut config = Config::default();
        config
            .apply_env_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(
            config.database.path,
            PathBuf::from("/srv/lessonbook/content.db")
        );
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_unparseable_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(|name| {
            (name == ENV_DATABASE_MAX_CONNECTIONS).then(|| "many".to_string())
        });

        match result {
            Err(ConfigError::InvalidOverride { variable, value }) => {
                assert_eq!(variable, ENV_DATABASE_MAX_CONNECTIONS);
                assert_eq!(value, "many");
            }
            other => panic!("Expected InvalidOverride, got {:?}", other),
        }
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with(Path::new("lessonbook").join(CONFIG_FILE)));
        }
    }
}
