// JSON preset loader
// Load extra presets from files at runtime

use msi_keyboard::{KeyboardError, Presets};
use std::path::Path;

/// Preset loading errors
#[derive(Debug, Clone)]
pub enum LoadError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {e}"),
            LoadError::Parse(e) => write!(f, "Parse error: {e}"),
            LoadError::Validation(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<KeyboardError> for LoadError {
    fn from(e: KeyboardError) -> Self {
        LoadError::Parse(e.to_string())
    }
}

/// Load a `{ "<name>": ["<hex>", ...] }` file, checking every payload decodes
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Presets, LoadError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| LoadError::Io(e.to_string()))?;
    let presets = Presets::from_json(&content)?;
    for name in presets.names() {
        presets
            .apply_preset(name)
            .map_err(|e| LoadError::Validation(e.to_string()))?;
    }
    Ok(presets)
}
