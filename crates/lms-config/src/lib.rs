//! Configuration management for the LMS content tools.
//!
//! Parses `lms.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [excerpt]
//! max_len = 160
//!
//! [output]
//! pretty = false
//! ```

use lms_content::DEFAULT_EXCERPT_LEN;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override excerpt length.
    pub max_len: Option<usize>,
    /// Override JSON pretty-printing.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lms.toml";

/// Upper bound for `excerpt.max_len`.
const MAX_EXCERPT_LEN: usize = 10_000;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing preview configuration.
    pub excerpt: ExcerptConfig,
    /// Output formatting configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Listing preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    /// Maximum preview length in characters.
    pub max_len: usize,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_EXCERPT_LEN,
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lms.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading and validated together with
    /// the file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(max_len) = settings.max_len {
            self.excerpt.max_len = max_len;
        }
        if let Some(pretty) = settings.pretty {
            self.output.pretty = pretty;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_len = self.excerpt.max_len;
        if max_len == 0 {
            return Err(ConfigError::Validation(
                "excerpt.max_len must be greater than 0".to_owned(),
            ));
        }
        if max_len > MAX_EXCERPT_LEN {
            return Err(ConfigError::Validation(format!(
                "excerpt.max_len cannot exceed {MAX_EXCERPT_LEN}"
            )));
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.excerpt.max_len, DEFAULT_EXCERPT_LEN);
        assert!(config.output.pretty);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.excerpt.max_len, DEFAULT_EXCERPT_LEN);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[excerpt]
max_len = 80

[output]
pretty = false
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.excerpt.max_len, 80);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let result: Result<Config, _> = toml::from_str("[excerpt]\nmax_len = \"long\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_max_len() {
        let mut config = Config::default();
        config.excerpt.max_len = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("excerpt.max_len"));
    }

    #[test]
    fn test_validate_max_len_upper_bound() {
        let mut config = Config::default();
        config.excerpt.max_len = MAX_EXCERPT_LEN + 1;
        assert!(config.validate().is_err());
        config.excerpt.max_len = MAX_EXCERPT_LEN;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            max_len: Some(60),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.excerpt.max_len, 60);
        assert!(config.output.pretty); // Unchanged
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[excerpt]\nmax_len = 42\n").unwrap();

        let settings = CliSettings {
            pretty: Some(false),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.excerpt.max_len, 42);
        assert!(!config.output.pretty);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_validates_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            max_len: Some(0),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[excerpt\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
