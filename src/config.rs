//! Runtime settings for the booking system, read from an optional TOML file.
//!
//! ```toml
//! channel_capacity = 64
//! log_filter = "venue_booking=debug,info"
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// Request buffer of each actor's channel.
    pub channel_capacity: usize,
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl BookingConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        // tokio's mpsc::channel panics on a zero buffer
        if config.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_without_a_file() {
        let config = BookingConfig::load(None).unwrap();
        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = BookingConfig::from_toml_str("channel_capacity = 8").unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "channel_capacity = 64").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = BookingConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_unknown_keys_and_zero_capacity() {
        assert!(matches!(
            BookingConfig::from_toml_str("capacity = 4"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BookingConfig::from_toml_str("channel_capacity = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = BookingConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
