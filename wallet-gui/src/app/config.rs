use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

use crate::app::wallet::Network;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use debug log level if true and no log level is set.
    pub debug: Option<bool>,
    /// Network selected at start up.
    pub network: Option<Network>,
    /// Simulated latencies and notification durations.
    #[serde(default)]
    pub timings: Timings,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Loads the configuration file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::debug!("No configuration file at {}", path.display());
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timings {
    pub connect: u64,
    pub fetch: u64,
    pub submit: u64,
    pub settle: u64,
    pub copied_reset: u64,
    pub toast: u64,
    pub help_toast: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            connect: 1500,
            fetch: 1000,
            submit: 2000,
            settle: 5000,
            copied_reset: 2000,
            toast: 4000,
            help_toast: 5000,
        }
    }
}

impl Timings {
    /// No latency at all, toasts included.
    pub fn instant() -> Self {
        Self {
            connect: 0,
            fetch: 0,
            submit: 0,
            settle: 0,
            copied_reset: 0,
            toast: 0,
            help_toast: 0,
        }
    }

    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect)
    }
    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch)
    }
    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit)
    }
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle)
    }
    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset)
    }
    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast)
    }
    pub fn help_toast(&self) -> Duration {
        Duration::from_millis(self.help_toast)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_from_file() {
        let file = write_config(
            r#"
            log_level = "debug"
            network = "solana"

            [timings]
            connect = 10
            settle = 20
            "#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(config.network, Some(Network::Solana));
        assert_eq!(config.timings.connect(), Duration::from_millis(10));
        assert_eq!(config.timings.settle(), Duration::from_millis(20));
        // Unset timings keep their default.
        assert_eq!(config.timings.fetch, Timings::default().fetch);
        assert_eq!(config.timings.help_toast, 5000);
    }

    #[test]
    fn test_invalid_log_level() {
        let file = write_config(r#"log_level = "loud""#);
        assert_eq!(
            Config::from_file(file.path()),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'loud'".to_string()
            ))
        );
    }

    #[test]
    fn test_debug_flag() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(
            Config::default().log_level().unwrap(),
            filter::LevelFilter::INFO
        );
    }

    #[test]
    fn test_unparsable_config() {
        let file = write_config("network = 3");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ReadingFile(_))
        ));
    }
}
