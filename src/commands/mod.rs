//! Command handlers for the CLI application.
//!
//! This module organizes command handlers by category:
//! - `lighting`: Commands that send colors (apply, steady, disable, random, preset)
//! - `config`: Color config file commands (set-key, compact, show)
//! - `info`: Listing commands (presets, models, devices)

pub mod config;
pub mod info;
pub mod lighting;

use crate::cli::Cli;
use anyhow::Context as _;
use msi_keyboard::{Keycode, KeyboardLayout, ModelTables};
use msi_perkeyrgb::{initial_layout, Device, DriverError, ModelRegistry, OpenOptions, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Settings merged with command-line overrides
pub struct Context {
    pub registry: ModelRegistry,
    pub settings_path: PathBuf,
    pub model: String,
    pub usb_id: String,
    pub config: PathBuf,
    pub bindings: Option<PathBuf>,
    pub presets_dir: Option<PathBuf>,
    pub options: OpenOptions,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
        debug!("Loading settings from {:?}", settings_path);
        let settings = Settings::load(&settings_path)
            .with_context(|| format!("Failed to read settings {}", settings_path.display()))?;

        let mut registry = ModelRegistry::with_builtins();
        if let Some(dir) = &settings.presets_dir {
            match registry.load_presets_from_directory(dir) {
                Ok(n) => debug!("Loaded {} preset files from {}", n, dir.display()),
                Err(e) => warn!("Skipping presets_dir: {}", e),
            }
        }

        Ok(Self {
            registry,
            settings_path,
            model: cli.model.clone().unwrap_or(settings.model),
            usb_id: cli.id.clone().unwrap_or(settings.usb_id),
            config: cli.config.clone().unwrap_or(settings.config),
            bindings: cli.bindings.clone().or(settings.bindings),
            presets_dir: settings.presets_dir,
            options: OpenOptions {
                monitor: cli.monitor,
                dry_run: cli.dry_run,
            },
        })
    }

    /// Settings as they stand after command-line overrides
    pub fn settings(&self) -> Settings {
        Settings {
            model: self.model.clone(),
            usb_id: self.usb_id.clone(),
            config: self.config.clone(),
            bindings: self.bindings.clone(),
            presets_dir: self.presets_dir.clone(),
        }
    }

    /// Tables of the selected model, without opening the keyboard
    pub fn tables(&self) -> Result<Arc<ModelTables>, DriverError> {
        self.registry.tables(&self.model)
    }

    /// Open the keyboard of the selected model
    pub fn open(&self) -> Result<Device, DriverError> {
        Device::open(&self.registry, &self.model, &self.usb_id, self.options)
    }

    /// Layout with the config file decoded onto it
    pub fn load_layout(&self, tables: &ModelTables) -> anyhow::Result<KeyboardLayout> {
        let mut layout = initial_layout(tables, self.bindings.as_deref())?;
        tables
            .codec()
            .load_from_file(&mut layout, &self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;
        Ok(layout)
    }
}

/// Keycode from a number or a key name
pub fn parse_key(key: &str) -> anyhow::Result<Keycode> {
    if let Ok(keycode) = key.parse::<Keycode>() {
        return Ok(keycode);
    }
    msi_keyboard::keycodes::keycode_from_name(key)
        .ok_or_else(|| anyhow::anyhow!("Unknown key '{key}' (use a keycode or a name like Esc)"))
}

/// Create the parent directory of a file about to be written
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Context for a dry run with every file under `dir`
    pub(crate) fn context(dir: &Path) -> Context {
        Context {
            registry: ModelRegistry::with_builtins(),
            settings_path: dir.join("settings.toml"),
            model: "GE63".to_string(),
            usb_id: msi_transport::DEFAULT_ID.to_string(),
            config: dir.join("colors.msic"),
            bindings: None,
            presets_dir: None,
            options: OpenOptions {
                monitor: false,
                dry_run: true,
            },
        }
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("38").unwrap(), 38);
        assert_eq!(parse_key("esc").unwrap(), 9);
        assert_eq!(parse_key("Fn").unwrap(), 666);
        assert!(parse_key("hyper").is_err());
    }
}
