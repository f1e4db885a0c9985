//! Logger setup for the storefront binary.
//!
//! Rendered pages own stdout, so terminal logging goes to stderr.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use log::{LevelFilter, SetLoggerError};
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to stderr.
    Terminal,
    /// Write to both file and stderr.
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub file: PathBuf,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not create log file {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetLoggerError),
}

/// Install the global logger described by `settings`.
pub fn initialize(settings: &LogSettings) -> Result<(), LoggingError> {
    CombinedLogger::init(build_loggers(settings)?)?;
    Ok(())
}

fn build_loggers(settings: &LogSettings) -> Result<Vec<Box<dyn SharedLogger>>, LoggingError> {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        let file = File::create(&settings.file).map_err(|source| LoggingError::File {
            path: settings.file.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(settings.level, config, file));
    }

    Ok(loggers)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
