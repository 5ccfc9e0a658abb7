//! File logging through the `log` facade
//!
//! The terminal is owned by the dialog, so log records only ever go to a
//! file, and only when `[logging] enabled = true`.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Install the global logger from config.
///
/// Returns the log file path when logging is enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    dispatch(log::LevelFilter::Debug, &path)?
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}

/// Build the file dispatch without installing it.
pub fn dispatch(level: log::LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // Third-party HTTP internals are noisy at debug level
        .level_for("hyper_util", log::LevelFilter::Info)
        .level_for("reqwest", log::LevelFilter::Info)
        .chain(file))
}

/// Location of the log file under the user data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
