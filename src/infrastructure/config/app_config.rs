//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::domain::entities::{GridSize, GridStyle};
use crate::infrastructure::spotify::DEFAULT_API_URL;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

const fn default_grid_size() -> GridSize {
    GridSize { x: 3, y: 3 }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Application configuration, loaded from the config file and
/// overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Default grid dimensions.
    #[serde(default = "default_grid_size")]
    pub grid_size: GridSize,

    /// Grid styling defaults.
    #[serde(default)]
    pub style: GridStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: LogLevel::default(),
            log_path: None,
            grid_size: default_grid_size(),
            style: GridStyle::default(),
        }
    }
}

impl AppConfig {
    /// Applies CLI flag overrides on top of file values.
    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(api_url) = &args.api_url {
            self.api_url.clone_from(api_url);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if args.log_path.is_some() {
            self.log_path.clone_from(&args.log_path);
        }
        if let Some(grid_size) = args.grid_size {
            self.grid_size = grid_size;
        }
        if let Some(use_gradient) = args.use_gradient {
            self.style.use_gradient = use_gradient;
        }
        if let Some(color1) = &args.color1 {
            self.style.color1.clone_from(color1);
        }
        if let Some(color2) = &args.color2 {
            self.style.color2.clone_from(color2);
        }
    }

    /// Returns the log file path, if logging to a file was requested.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }
}
