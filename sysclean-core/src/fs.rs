//! File System Locations
//!
//! Per-user directories for settings and logs.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "sysclean", "sysclean").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/sysclean/` or `$XDG_CONFIG_HOME/sysclean/`
/// - **macOS**: `~/Library/Application Support/io.sysclean.sysclean/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\sysclean\sysclean\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

/// Get or create the directory holding rolling log files
///
/// - **Linux**: `~/.local/share/sysclean/logs/`
/// - **macOS**: `~/Library/Application Support/io.sysclean.sysclean/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\sysclean\sysclean\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let log_dir = dirs.data_dir().join("logs");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }
    Ok(log_dir)
}
