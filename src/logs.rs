//! Tracing setup for the terminal front end.
//!
//! The terminal belongs to the UI, so log output goes to a file. The filter
//! comes from `RUST_LOG` when set, otherwise from the configured level.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default log file location: `shiu.log` in the system temp directory.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("shiu.log")
}

/// Build the filter: `RUST_LOG` wins, then `default_level`, then "info".
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `log_file`.
pub fn init_tracing(log_file: &Path, default_level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter(default_level)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging to {:?}", log_file);
    Ok(())
}
