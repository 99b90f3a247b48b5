//! Optional session configuration read from `./verdict.ron`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use verdict_engine::AnalysisSettings;
use verdict_logging::LogDestination;

pub const CONFIG_FILENAME: &str = "verdict.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulated_latency_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 900,
            log_destination: LogDestination::File,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            simulated_latency: Duration::from_millis(self.simulated_latency_ms),
        }
    }
}

/// Loads `{dir}/verdict.ron`. A missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
