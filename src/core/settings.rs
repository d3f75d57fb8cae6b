use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Viewer settings loaded from ~/.config/matchview/settings.json
///
/// Missing fields take their `#[serde(default = ...)]` value, so settings
/// files written by older versions keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Soft-wrap long lines of code.
    #[serde(default = "default_soft_wrap")]
    pub soft_wrap: bool,

    /// Hide code that was not used in the comparison.
    #[serde(default = "default_hide_ignored")]
    pub hide_ignored: bool,

    /// Show leading whitespace.
    #[serde(default = "default_show_white_space")]
    pub show_white_space: bool,
}

fn default_soft_wrap() -> bool {
    true
}

fn default_hide_ignored() -> bool {
    false
}

fn default_show_white_space() -> bool {
    false
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerSettings {
            soft_wrap: default_soft_wrap(),
            hide_ignored: default_hide_ignored(),
            show_white_space: default_show_white_space(),
        }
    }
}

impl ViewerSettings {
    /// Load settings from the default path, falling back to defaults (and
    /// repairing the file) if it is missing or invalid.
    pub fn load() -> Self {
        let path = Self::settings_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                let defaults = ViewerSettings::default();
                if let Err(save_err) = defaults.save_to(&path) {
                    eprintln!("Warning: Failed to write default settings: {}", save_err);
                }
                defaults
            }
        }
    }

    /// Load settings from an explicit path with a descriptive error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file at {}: {}", path.display(), e))?;

        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings.json: {}. Check JSON syntax.", e))
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::settings_path())
    }

    /// Save settings to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write settings file at {}: {}", path.display(), e))
    }

    fn settings_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("matchview")
            .join("settings.json")
    }
}
