//! Logical keys and the per-session keyboard layout
//!
//! A layout is a keyed collection: one entry per platform keycode, kept in
//! ascending keycode order. Two records with the same keycode are the same
//! key, so loading keeps only the last one.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::ColorValue;
use crate::error::KeyboardError;
use crate::keycodes;
use crate::keymap::MsiKeymap;
use crate::{ColorMap, Keycode};

/// On-screen rectangle `[[x0, y0], [x1, y1]]` of a key, used by GUIs only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBox(pub [[i32; 2]; 2]);

/// One record of a key-bindings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<KeyBox>,
    pub keycode: Keycode,
    pub name: String,
    #[serde(default)]
    pub color: ColorValue,
}

/// A single key with its current color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalKey {
    pub keycode: Keycode,
    pub name: String,
    pub color: ColorValue,
    pub bounds: Option<KeyBox>,
}

impl LogicalKey {
    pub fn new(keycode: Keycode, name: impl Into<String>) -> Self {
        Self {
            keycode,
            name: name.into(),
            color: ColorValue::BLACK,
            bounds: None,
        }
    }

    pub fn with_color(mut self, color: ColorValue) -> Self {
        self.color = color;
        self
    }
}

impl From<KeyBinding> for LogicalKey {
    fn from(b: KeyBinding) -> Self {
        Self {
            keycode: b.keycode,
            name: b.name,
            color: b.color,
            bounds: b.bounds,
        }
    }
}

impl From<&LogicalKey> for KeyBinding {
    fn from(k: &LogicalKey) -> Self {
        Self {
            bounds: k.bounds,
            keycode: k.keycode,
            name: k.name.clone(),
            color: k.color,
        }
    }
}

/// Ordered, keycode-unique collection of keys for one model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardLayout {
    keys: BTreeMap<Keycode, LogicalKey>,
}

impl KeyboardLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from binding records; the last record for a keycode wins
    pub fn from_bindings(bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        let mut layout = Self::new();
        for binding in bindings {
            layout.insert(binding.into());
        }
        layout
    }

    /// One black key per platform keycode the keymap covers
    pub fn from_keymap(keymap: &MsiKeymap) -> Self {
        let mut layout = Self::new();
        for keycode in keymap.platform_keycodes() {
            let name = keycodes::key_name(keycode)
                .map(str::to_string)
                .unwrap_or_else(|| keycode.to_string());
            layout.insert(LogicalKey::new(keycode, name));
        }
        layout
    }

    /// Parse a key-bindings JSON document
    pub fn from_json(json: &str) -> Result<Self, KeyboardError> {
        let bindings: Vec<KeyBinding> = serde_json::from_str(json)?;
        Ok(Self::from_bindings(bindings))
    }

    /// Load a key-bindings file; a missing file gives an empty layout
    pub fn load_bindings<P: AsRef<Path>>(path: P) -> Result<Self, KeyboardError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Key bindings {} not found", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let layout = Self::from_json(&content)?;
        debug!("Loaded {} keys from {}", layout.len(), path.display());
        Ok(layout)
    }

    /// Binding records sorted by keycode
    pub fn to_bindings(&self) -> Vec<KeyBinding> {
        self.keys.values().map(KeyBinding::from).collect()
    }

    pub fn to_json(&self) -> Result<String, KeyboardError> {
        Ok(serde_json::to_string_pretty(&self.to_bindings())?)
    }

    pub fn save_bindings<P: AsRef<Path>>(&self, path: P) -> Result<(), KeyboardError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Insert or replace the key with the same keycode
    pub fn insert(&mut self, key: LogicalKey) -> Option<LogicalKey> {
        self.keys.insert(key.keycode, key)
    }

    /// Look up a key; a miss is logged, since models may lack keys
    pub fn get(&self, keycode: Keycode) -> Option<&LogicalKey> {
        let key = self.keys.get(&keycode);
        if key.is_none() {
            warn!("Unknown keycode: {}", keycode);
        }
        key
    }

    pub fn get_mut(&mut self, keycode: Keycode) -> Option<&mut LogicalKey> {
        let key = self.keys.get_mut(&keycode);
        if key.is_none() {
            warn!("Unknown keycode: {}", keycode);
        }
        key
    }

    pub fn contains(&self, keycode: Keycode) -> bool {
        self.keys.contains_key(&keycode)
    }

    /// Set one key's color; returns false when the key is absent
    pub fn set_color(&mut self, keycode: Keycode, color: ColorValue) -> bool {
        match self.get_mut(keycode) {
            Some(key) => {
                key.color = color;
                true
            }
            None => false,
        }
    }

    /// Set every key to one color
    pub fn fill(&mut self, color: ColorValue) {
        for key in self.keys.values_mut() {
            key.color = color;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogicalKey> {
        self.keys.values()
    }

    pub fn keycodes(&self) -> impl Iterator<Item = Keycode> + '_ {
        self.keys.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Snapshot of keycode → color
    pub fn color_map(&self) -> ColorMap {
        self.keys.iter().map(|(&k, key)| (k, key.color)).collect()
    }
}
