use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

use notification_ui::{
    color::{self, ParseColorError},
    theme::{
        notification::{LoadingColors, NotificationColors},
        Theme,
    },
};

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

/// Delay after which a notification is cleared, if not configured.
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Hex colors (`#RRGGBB` or `#RRGGBBAA`) overriding the theme palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorsConfig {
    pub container_color: Option<String>,
    pub error_container_color: Option<String>,
    pub content_color: Option<String>,
    pub content_error_color: Option<String>,
    pub loading_container_color: Option<String>,
    pub loading_content_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use debug log level if true and no log level is set.
    pub debug: Option<bool>,
    #[serde(default)]
    pub theme: ThemeName,
    /// Auto-dismiss delay of notifications, 0 disables it.
    pub dismiss_after_ms: Option<u64>,
    #[serde(default)]
    pub colors: ColorsConfig,
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

        // check the fields that are only parsed on use
        config.log_level()?;
        config.notification_colors()?;
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

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }

    /// `None` if auto-dismiss is disabled.
    pub fn dismiss_after(&self) -> Option<Duration> {
        match self.dismiss_after_ms.unwrap_or(DEFAULT_DISMISS_AFTER_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn notification_colors(&self) -> Result<(NotificationColors, LoadingColors), ConfigError> {
        let c = &self.colors;
        Ok((
            NotificationColors {
                container: parse_color("container_color", &c.container_color)?,
                error_container: parse_color("error_container_color", &c.error_container_color)?,
                content: parse_color("content_color", &c.content_color)?,
                content_error: parse_color("content_error_color", &c.content_error_color)?,
            },
            LoadingColors {
                container: parse_color("loading_container_color", &c.loading_container_color)?,
                content: parse_color("loading_content_color", &c.loading_content_color)?,
            },
        ))
    }
}

fn parse_color(
    field: &'static str,
    value: &Option<String>,
) -> Result<Option<iced::Color>, ConfigError> {
    value
        .as_deref()
        .map(color::from_hex)
        .transpose()
        .map_err(|e: ParseColorError| ConfigError::InvalidField(field, e.to_string()))
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Error while writing file: {0}")]
    WritingFile(String),
}
