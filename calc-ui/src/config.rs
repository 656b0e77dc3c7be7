//! Application settings loaded from an optional TOML file.
//!
//! ## File format
//!
//! Every section and key is optional; anything left out takes the default
//! shown here. Unknown keys are rejected so typos surface early.
//!
//! ```toml
//! [window]
//! width = 420.0
//! height = 550.0
//! title = "Calculator"
//!
//! [logging]
//! level = "info"            # bare level or full RUST_LOG-style directive
//! file = "calculator.log"   # omit to log to stdout only
//! stdout = true
//!
//! [calculator]
//! error_entry = "append"    # or "restart"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use calc_core::CalculatorConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or validating a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("window {dimension} must be a positive number of pixels, got {value}")]
    InvalidWindowSize { dimension: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 550.0,
            title: "Calculator".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    /// Reads and validates the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in [("width", self.window.width), ("height", self.window.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidWindowSize { dimension, value });
            }
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
        quiet: bool,
    ) -> Self {
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if log_file.is_some() {
            self.logging.file = log_file;
        }
        if quiet {
            self.logging.stdout = false;
        }
        self
    }
}
