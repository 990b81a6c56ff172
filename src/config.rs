//! Platform paths and application settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::Fallback;

/// Directory name under the platform config directory
pub const APP_DIR: &str = "bookmark-launcher";

/// File name of the bookmarks document
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Get the settings directory
/// - macOS: ~/Library/Application Support/bookmark-launcher/
/// - Linux: ~/.config/bookmark-launcher/
/// - Windows: %APPDATA%/bookmark-launcher/
pub fn config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join(APP_DIR))
}

/// Get the default settings file (`config.json` in [`config_dir`])
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the default bookmarks file: `bookmarks.json` next to the executable
pub fn default_bookmarks_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not determine executable path")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(BOOKMARKS_FILE))
}

/// Contents of `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bookmarks file to use instead of the one next to the executable
    pub bookmarks_path: Option<PathBuf>,

    /// Start from the bundled bookmarks when the bookmarks file is missing
    pub seed_defaults: bool,

    /// Application to open URLs with instead of the system default
    pub browser: Option<String>,

    /// Ask before removing a bookmark
    pub confirm_remove: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bookmarks_path: None,
            seed_defaults: true,
            browser: None,
            confirm_remove: true,
        }
    }
}

impl Settings {
    /// Read settings from `path`, creating the file with defaults if missing
    ///
    /// Unreadable or malformed settings fall back to the defaults.
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::read(path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("{:#}; using default settings", e);
                    Self::default()
                }
            }
        } else {
            let settings = Self::default();
            if let Err(e) = settings.write(path) {
                log::warn!("{:#}", e);
            }
            settings
        }
    }

    /// Read settings from a file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }

    /// Write settings to a file, creating its directory
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
    }

    /// Resolve the bookmarks file: explicit override, then settings, then default
    pub fn bookmarks_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        match override_path.or(self.bookmarks_path.as_deref()) {
            Some(path) => Ok(path.to_path_buf()),
            None => default_bookmarks_path(),
        }
    }

    /// Dataset to start from when the bookmarks file is missing
    pub fn fallback(&self) -> Fallback {
        if self.seed_defaults {
            Fallback::Defaults
        } else {
            Fallback::Empty
        }
    }
}
