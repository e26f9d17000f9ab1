//! Application Settings
//!
//! User preferences persisted as TOML in the configuration directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::Result;
use crate::fs::get_or_create_config_dir;
use crate::table::DEFAULT_PAGE_SIZE;

const SETTINGS_FILE: &str = "sysclean.toml";

/// Repository queried by the update check
pub const DEFAULT_UPDATE_REPO: &str = "sysclean/sysclean";

/// Path of the settings file, created empty when missing
pub fn settings_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    /// Scan deeper directory levels when looking for junk
    pub deep_scan: bool,
    /// Clean automatically after a scan
    pub auto_clean: bool,
    pub page_size: usize,
    pub sidebar_collapsed: bool,
    /// Publish date of the running version, `YYYY-MM-DD`
    pub date_version: Option<String>,
    /// Date of the last update check, `YYYY-MM-DD`
    pub date_check: Option<String>,
    /// `owner/name` of the GitHub repository publishing releases
    pub update_repo: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            deep_scan: false,
            auto_clean: false,
            page_size: DEFAULT_PAGE_SIZE,
            sidebar_collapsed: false,
            date_version: None,
            date_check: None,
            update_repo: DEFAULT_UPDATE_REPO.to_string(),
        }
    }
}

impl AppSettings {
    /// Load from the default location
    pub fn try_load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    /// Load from `path`; an empty or missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        if !path.exists() {
            return Ok(Self::default());
        }
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut settings: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        if settings.page_size == 0 {
            settings.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(settings)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Display text for a stored date
    pub fn date_label(date: Option<&str>) -> &str {
        date.unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sysclean-settings-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_or_empty_file_gives_defaults() {
        let dir = temp_dir("empty");
        let path = dir.join(SETTINGS_FILE);
        assert_eq!(AppSettings::load_from(&path).unwrap(), AppSettings::default());

        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), AppSettings::default());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = temp_dir("roundtrip");
        let path = dir.join(SETTINGS_FILE);
        let settings = AppSettings {
            deep_scan: true,
            date_check: Some("2025-05-01".into()),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = temp_dir("partial");
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "auto_clean = true\npage_size = 0\n").unwrap();
        let settings = AppSettings::load_from(&path).unwrap();
        assert!(settings.auto_clean);
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.update_repo, DEFAULT_UPDATE_REPO);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_files_are_errors() {
        let dir = temp_dir("broken");
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "dark_mode = \"maybe\"").unwrap();
        assert!(AppSettings::load_from(&path).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
