//! Configuration management for familyvault.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::report::ReportFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "familyvault";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FAMILYVAULT_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FAMILYVAULT_`, sections split by `__`)
/// 2. TOML config file at `~/.config/familyvault/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report output configuration.
    pub report: ReportConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Format of the summary report.
    pub format: ReportFormat,
    /// Print a confirmation line for each created record.
    /// Ignored for JSON output.
    pub show_confirmations: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v`/`-q` flag or `RUST_LOG` is given
    /// (`error`, `warn`, `info`, `debug`, or `trace`).
    pub level: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Plain,
            show_confirmations: true,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific configuration file.
    ///
    /// Unlike [`Config::load_from`], the file must exist. Environment
    /// overrides still apply, so the result is the configuration that would
    /// be in effect with this file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be parsed, or holds
    /// invalid values.
    pub fn validate_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            if level.parse::<tracing::Level>().is_err() {
                return Err(Error::config_validation(format!(
                    "invalid logging.level '{level}': expected one of error, warn, info, debug, trace"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    // Loading reads the process environment, so every test that loads runs
    // inside a `Jail`, which serializes them and restores the environment.
    fn load(path: &str) -> Result<Config> {
        Config::load_from(Some(PathBuf::from(path)))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.report.format, ReportFormat::Plain);
        assert!(config.report.show_confirmations);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_validate_known_log_level() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.level = Some("debug".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = Some("loud".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("logging.level"));
        assert!(err.contains("loud"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.ends_with("familyvault/config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_| {
            let config = load("/nonexistent/config.toml").unwrap();
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[report]\nformat = \"json\"\nshow_confirmations = false\n",
            )?;

            let config = load("config.toml").unwrap();
            assert_eq!(config.report.format, ReportFormat::Json);
            assert!(!config.report.show_confirmations);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("FAMILYVAULT_REPORT__SHOW_CONFIRMATIONS", "false");
            jail.set_env("FAMILYVAULT_LOGGING__LEVEL", "debug");

            let config = load("missing.toml").unwrap();
            assert!(!config.report.show_confirmations);
            assert_eq!(config.logging.level.as_deref(), Some("debug"));
            assert_eq!(config.report.format, ReportFormat::Plain);
            Ok(())
        });
    }

    #[test]
    fn test_env_wins_over_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[report]\nformat = \"plain\"\n")?;
            jail.set_env("FAMILYVAULT_REPORT__FORMAT", "json");

            assert_eq!(load("config.toml").unwrap().report.format, ReportFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_log_level() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[logging]\nlevel = \"chatty\"\n")?;

            let err = load("config.toml").unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[report]\nformat = \"yaml\"\n")?;

            assert!(matches!(load("config.toml").unwrap_err(), Error::ConfigLoad(_)));
            Ok(())
        });
    }

    #[test]
    fn test_validate_file_accepts_good_file() {
        Jail::expect_with(|jail| {
            jail.create_file("good.toml", "[logging]\nlevel = \"warn\"\n")?;

            let config = Config::validate_file(Path::new("good.toml")).unwrap();
            assert_eq!(config.logging.level.as_deref(), Some("warn"));
            Ok(())
        });
    }

    #[test]
    fn test_validate_file_rejects_missing_file() {
        Jail::expect_with(|_| {
            let err = Config::validate_file(Path::new("does-not-exist.toml")).unwrap_err();
            assert!(matches!(err, Error::ConfigNotFound { .. }));
            assert!(err.to_string().contains("does-not-exist.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_validate_file_rejects_bad_file() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[logging]\nlevel = \"chatty\"\n")?;

            let err = Config::validate_file(Path::new("bad.toml")).unwrap_err();
            assert!(err.is_config_error());
            assert!(err.to_string().contains("chatty"));
            Ok(())
        });
    }

    #[test]
    fn test_report_config_deserialize() {
        let json = r#"{"format": "json"}"#;
        let report: ReportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(report.format, ReportFormat::Json);
        assert!(report.show_confirmations);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("show_confirmations"));
        assert!(json.contains(r#""format":"plain""#));
    }
}
