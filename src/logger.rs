//! File logging setup for debugging and error tracking.
//!
//! The TUI owns the terminal, so log output goes to a file instead of
//! stderr. Logging is off by default and enabled from the config.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Initialize the global logger according to the logging config.
/// Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path: PathBuf = config
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("taskdash.log"));

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to initialize logger")?;

    Ok(())
}
