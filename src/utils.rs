//! Utility functions used throughout the application

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("pbrowse-debug.log");
    path
}

/// Install the global tracing subscriber
///
/// With `debug`, everything down to DEBUG is appended to the debug log file.
/// Otherwise only warnings and errors go to stderr.
pub fn init_logging(debug: bool) -> Result<()> {
    if debug {
        let path = get_debug_log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open debug log {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
