use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use storefront_engine::CatalogueSettings;
use thiserror::Error;

use super::logging::{LogDestination, LogSettings};

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILENAME: &str = "storefront.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub catalogue_url: String,
    /// Pause before the first catalogue fetch, so the loading state is visible.
    pub startup_delay_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let settings = CatalogueSettings::default();
        Self {
            catalogue_url: settings.url,
            startup_delay_ms: 1500,
            connect_timeout_ms: millis(settings.connect_timeout),
            request_timeout_ms: millis(settings.request_timeout),
            max_bytes: settings.max_bytes,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            log_file: PathBuf::from("storefront.log"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

impl StorefrontConfig {
    /// Load from `path`, or from [`CONFIG_FILENAME`] when `path` is `None`.
    ///
    /// Only the implicit file may be absent; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILENAME), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let config =
            Self::parse(&content).map_err(|message| ConfigError::Parse { path, message })?;
        config.log_settings()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn log_settings(&self) -> Result<LogSettings, ConfigError> {
        let level = LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(LogSettings {
            destination: self.log_destination,
            level,
            file: self.log_file.clone(),
        })
    }

    pub fn catalogue_settings(&self) -> CatalogueSettings {
        CatalogueSettings {
            url: self.catalogue_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
