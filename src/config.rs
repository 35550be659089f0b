use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Largest row or column count the terminal view can lay out.
pub const MAX_DIMENSION: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log destination. Logging is disabled when unset, since the terminal UI
    /// owns the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file did not exist and defaults were used.
    Defaults { missing: PathBuf },
}

impl ConfigSource {
    /// Warning to show the user when the configured file was not found.
    pub fn fallback_notice(&self) -> Option<String> {
        match self {
            ConfigSource::File(_) => None,
            ConfigSource::Defaults { missing } => Some(format!(
                "Warning: config file '{}' not found, using defaults",
                missing.display()
            )),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The returned source tells the caller which happened, so
    /// the fallback can be reported once output and logging are set up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((
                Self::default(),
                ConfigSource::Defaults {
                    missing: path.to_path_buf(),
                },
            ))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 1".into(),
            ));
        }
        if self.board.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.columns > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.columns must be <= {MAX_DIMENSION}"
            )));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.columns, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.columns, 9);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.columns = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.rows = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".into();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, source) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(
            source,
            ConfigSource::Defaults {
                missing: PathBuf::from("nonexistent_config.toml")
            }
        );
        assert_eq!(
            source.fallback_notice().as_deref(),
            Some("Warning: config file 'nonexistent_config.toml' not found, using defaults")
        );
    }

    #[test]
    fn test_load_or_default_existing_file_has_no_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[board]\ncolumns = 8\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.board.columns, 8);
        assert_eq!(source, ConfigSource::File(path));
        assert_eq!(source.fallback_notice(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8

[logging]
level = "debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.columns, 7);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.board, BoardConfig::default());
    }
}
