//! Logging setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so tracing output
//! goes to a log file instead. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::LoggingConfig;
use crate::core::{Result, ShelfError};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file used when the config does not name one.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tuishelf")
        .join("tuishelf.log")
}

/// Builds the level filter: `RUST_LOG` if set, otherwise the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| ShelfError::Config(format!("Invalid log level '{}': {}", level, e))),
    }
}

/// Installs the global tracing subscriber writing to the configured log file.
///
/// Returns the path logs are written to.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ShelfError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(path)
}
