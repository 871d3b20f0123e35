//! Configuration management for taskdash
//!
//! This module handles loading, parsing, and validation of configuration
//! files, plus the environment overrides used for per-session state like the
//! CSRF token.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{POLL_BACKOFF_MULTIPLIER, POLL_INTERVAL_MAX_MS, POLL_INTERVAL_MIN_MS};
use crate::icons::IconTheme;

/// Environment variable overriding the task endpoint URL.
pub const ENV_TASK_URL: &str = "TASKDASH_TASK_URL";
/// Environment variable overriding the CSRF token.
pub const ENV_CSRF_TOKEN: &str = "TASKDASH_CSRF_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub polling: PollingConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Server connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Task-list endpoint URL
    pub task_url: String,
    /// CSRF token issued by the server for this session
    pub csrf_token: String,
}

/// Task polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Minimum (and initial) poll interval in milliseconds
    pub min_interval_ms: u64,
    /// Maximum poll interval in milliseconds
    pub max_interval_ms: u64,
    /// Backoff multiplier applied after each quiet poll
    pub backoff_multiplier: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme for status and severity markers
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log file path; defaults to `taskdash.log` in the working directory
    pub file: Option<PathBuf>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: POLL_INTERVAL_MIN_MS,
            max_interval_ms: POLL_INTERVAL_MAX_MS,
            backoff_multiplier: POLL_BACKOFF_MULTIPLIER,
        }
    }
}

impl Config {
    /// Load configuration from file (or defaults), then apply environment
    /// overrides for the server section.
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file()? {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("taskdash.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("taskdash").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// The hosting environment hands the session state to the process via
    /// env vars; they win over anything in the file.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_TASK_URL) {
            self.server.task_url = url;
        }
        if let Ok(token) = std::env::var(ENV_CSRF_TOKEN) {
            self.server.csrf_token = token;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.polling.min_interval_ms == 0 {
            anyhow::bail!("polling.min_interval_ms must be at least 1");
        }
        if self.polling.max_interval_ms < self.polling.min_interval_ms {
            anyhow::bail!(
                "polling.max_interval_ms ({}) must not be below min_interval_ms ({})",
                self.polling.max_interval_ms,
                self.polling.min_interval_ms
            );
        }
        if self.polling.backoff_multiplier < 2 {
            anyhow::bail!("polling.backoff_multiplier must be at least 2");
        }
        Ok(())
    }

    /// Write a commented default config to the XDG config path and return it.
    pub fn generate_default() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("taskdash");
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create {}", config_dir.display()))?;

        let path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(&Config::default())
            .context("Failed to serialize default config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn inverted_intervals_are_rejected() {
        let mut config = Config::default();
        config.polling.max_interval_ms = 10;
        assert!(config.validate().is_err());
    }
}
