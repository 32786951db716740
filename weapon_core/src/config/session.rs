//! Session configuration for the interactive shell

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Level names accepted by `logging.level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Settings for one shell session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed seed for the dice RNG (None = seed from entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter; RUST_LOG takes precedence when set
    #[serde(default = "default_level")]
    pub level: String,
    /// Directory the log file is written to
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            directory: default_directory(),
            file_name: default_file_name(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_directory() -> PathBuf {
    PathBuf::from("logs")
}
fn default_file_name() -> String {
    "weapon_damage.log".to_string()
}

impl SessionConfig {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a session configuration from a TOML file
pub fn load_session_config(path: &Path) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a session configuration from a TOML string
pub fn parse_session_config(content: &str) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the bundled session configuration
pub fn default_session_config() -> SessionConfig {
    let toml = include_str!("../../config/session.toml");
    parse_session_config(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config() {
        let config = default_session_config();
        assert_eq!(config.seed, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.directory, PathBuf::from("logs"));
        assert_eq!(config.logging.file_name, "weapon_damage.log");
    }

    #[test]
    fn test_parse_session_config() {
        let toml = r#"
seed = 42

[logging]
level = "debug"
directory = "/tmp/weapon"
file_name = "session.log"
"#;

        let config = parse_session_config(toml).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, PathBuf::from("/tmp/weapon"));
        assert_eq!(config.logging.file_name, "session.log");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_session_config("").unwrap();
        assert_eq!(config, SessionConfig::default());

        let config = parse_session_config("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file_name, "weapon_damage.log");
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = parse_session_config("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = parse_session_config("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_session_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
