use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{error::Result, settings::{LogSettings, Settings}, APP_NAME, DEFAULT_LOG_LEVEL};

pub fn log_path() -> Result<PathBuf> {
    let dirs = Settings::project_dirs()?;
    Ok(dirs.data_local_dir().join(format!("{APP_NAME}.log")))
}

/// Sends tracing output to a file, the terminal belongs to the UI.
pub fn init(settings: &LogSettings) -> Result<PathBuf> {
    let path = log_path()?;
    let file = open_log_file(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(level_filter(&settings.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

/// Creates the parent directory if needed and opens `path` for appending.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Unparseable levels fall back to the default instead of silencing logs.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
