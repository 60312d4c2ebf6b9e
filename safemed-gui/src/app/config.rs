use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

use safemed::navigation::NavTabs;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
    /// Routes on which the bottom navigation bar is shown, in tab order.
    #[serde(default)]
    pub nav_tabs: NavTabs,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            debug: None,
            nav_tabs: NavTabs::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
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

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use safemed::navigation::Route;

    #[test]
    fn deserialize_config_with_custom_tabs() {
        let toml_str = r#"
            log_level = "debug"
            nav_tabs = ["home", "map", "scan", "profile"]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::DEBUG));
        assert_eq!(config.nav_tabs, NavTabs::with_map());
        assert!(!config.nav_tabs.contains(Route::Chat));
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.log_level(), Ok(filter::LevelFilter::INFO));
        assert_eq!(config.nav_tabs, NavTabs::with_chat());
    }

    #[test]
    fn config_round_trips_through_its_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let config = Config {
            log_level: Some("debug".to_string()),
            debug: None,
            nav_tabs: NavTabs::with_map(),
        };
        config.to_file(&path).unwrap();

        let read = Config::from_file(&path).unwrap();
        assert_eq!(read.log_level, config.log_level);
        assert_eq!(read.nav_tabs, config.nav_tabs);
    }

    #[test]
    fn missing_config_file_is_reported_as_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join(DEFAULT_FILE_NAME)).unwrap_err();
        assert_eq!(err, ConfigError::NotFound);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let config: Config = toml::from_str(r#"log_level = "noisy""#).unwrap();
        assert_eq!(
            config.log_level(),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'noisy'".to_string()
            ))
        );
    }
}
