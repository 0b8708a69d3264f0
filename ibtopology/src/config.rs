//! Configuration module for the topology generator
//!
//! Supports loading configuration from a TOML file.

use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::source::DEFAULT_IBNETDISCOVER;

/// Tool configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Discovery program settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How to run `ibnetdiscover`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Program path (default: /usr/sbin/ibnetdiscover)
    #[serde(default = "default_discovery_path")]
    pub path: String,

    /// Extra arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Rendering of the topology lines
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Switch name prefix (default: Switch)
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Leave out `Switches=` (default: false)
    #[serde(default)]
    pub nodes_only: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (default: "ibtopology=warn,ibfabric=warn")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_discovery_path() -> String {
    DEFAULT_IBNETDISCOVER.to_string()
}

fn default_prefix() -> String {
    ibfabric::RenderOptions::default().prefix
}

fn default_log_level() -> String {
    "ibtopology=warn,ibfabric=warn".to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            path: default_discovery_path(),
            args: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            nodes_only: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns `None` if the file doesn't exist. This runs before logging is
    /// set up, so the caller reports the fallback.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AppError::ConfigParse {
                path: path.display().to_string(),
                source,
            })
    }
}
