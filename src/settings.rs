//! Persistent user settings
//!
//! Stored as TOML in the user config directory. Every field is optional in
//! the file; command-line flags override whatever is stored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the user config directory
const APP_DIR: &str = "msi-perkeyrgb";

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_model() -> String {
    "GE63".to_string()
}

fn default_usb_id() -> String {
    msi_transport::DEFAULT_ID.to_string()
}

fn default_config() -> PathBuf {
    config_dir().join("colors.msic")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Laptop model, e.g. `GE63`
    #[serde(default = "default_model")]
    pub model: String,
    /// USB `vendor:product` of the keyboard
    #[serde(default = "default_usb_id")]
    pub usb_id: String,
    /// Color config file
    #[serde(default = "default_config")]
    pub config: PathBuf,
    /// Key-bindings file; the model keymap is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<PathBuf>,
    /// Directory of extra `<MODEL>.json` preset files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            usb_id: default_usb_id(),
            config: default_config(),
            bindings: None,
            presets_dir: None,
        }
    }
}

impl Settings {
    /// Default settings file path
    pub fn default_path() -> PathBuf {
        config_dir().join("settings.toml")
    }

    /// Load settings from a file, or return defaults if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
