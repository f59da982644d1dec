use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What `get_path` returns when the platform declines to produce a short form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShortNameFallback {
    /// Report the failure to the host
    #[default]
    Fail,
    /// Hand back the path that was passed in
    OriginalPath,
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Plugin settings stored as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Behaviour when no short path can be produced
    pub fallback: ShortNameFallback,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: LogLevel,
    /// Whether to write logs to file
    pub log_to_file: bool,
    /// Maximum number of log files to keep
    pub log_max_files: usize,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            fallback: ShortNameFallback::Fail,
            log_level: LogLevel::Info,
            log_to_file: false,
            log_max_files: 5,
        }
    }
}

impl PluginConfig {
    /// Directory holding the config file and logs (~/.pathcopy)
    pub fn data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get user home directory")?;
        Ok(home_dir.join(".pathcopy"))
    }

    /// Get the config file path (~/.pathcopy/shortpath.json)
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("shortpath.json"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path()?)
    }

    /// Load configuration from the specified path, using defaults for missing fields
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(target: "config", path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config: PluginConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;

        tracing::info!(target: "config", path = %path.display(), "Loaded configuration from file");

        Ok(config)
    }

    /// Save the configuration to disk
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).context("Failed to write config file")?;

        tracing::debug!(target: "config", path = %path.display(), "Configuration saved");

        Ok(())
    }
}
