//! File-backed tracing setup
//!
//! The terminal belongs to the UI, so log lines go to a file instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const DEFAULT_FILTER: &str = "weather_screen=info";

/// Install the global subscriber.
///
/// Returns the log file path on success. If no path can be determined or
/// the file cannot be opened, logging stays disabled and `None` is returned.
pub fn init(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.or_else(Config::default_log_path)?;
    let file = open_log_file(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "logging initialised");
    Some(path)
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
