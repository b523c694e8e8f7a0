//! Built-in lighting presets
//!
//! A preset is an ordered list of raw feature reports, stored as hex
//! strings and replayed verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::KeyboardError;

/// Preset name → hex report payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presets {
    presets: BTreeMap<String, Vec<String>>,
}

impl Presets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ "<name>": ["<hex>", ...] }` document
    pub fn from_json(json: &str) -> Result<Self, KeyboardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, payloads: Vec<String>) {
        self.presets.insert(name.into(), payloads);
    }

    /// Add every preset of `other`, replacing same-named ones
    pub fn merge(&mut self, other: Presets) {
        self.presets.extend(other.presets);
    }

    /// Preset names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Check that a preset exists and return its canonical name
    pub fn parse_preset(&self, name: &str) -> Result<&str, KeyboardError> {
        self.presets
            .get_key_value(name)
            .map(|(k, _)| k.as_str())
            .ok_or_else(|| KeyboardError::UnknownPreset(name.to_string()))
    }

    /// Decoded reports of a preset, in replay order
    pub fn apply_preset(&self, name: &str) -> Result<Vec<Vec<u8>>, KeyboardError> {
        let payloads = self
            .presets
            .get(name)
            .ok_or_else(|| KeyboardError::UnknownPreset(name.to_string()))?;
        payloads
            .iter()
            .map(|p| {
                hex::decode(p).map_err(|e| KeyboardError::InvalidPreset {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "white": ["0e002a00ffffff", "0e000b00ffffff"],
        "off": ["0e002a00000000"],
        "broken": ["0e0z"]
    }"#;

    #[test]
    fn test_names_sorted() {
        let presets = Presets::from_json(JSON).unwrap();
        assert_eq!(presets.names().collect::<Vec<_>>(), vec!["broken", "off", "white"]);
    }

    #[test]
    fn test_apply_preset_decodes_in_order() {
        let presets = Presets::from_json(JSON).unwrap();
        let reports = presets.apply_preset("white").unwrap();
        assert_eq!(
            reports,
            vec![
                vec![0x0e, 0x00, 0x2a, 0x00, 0xff, 0xff, 0xff],
                vec![0x0e, 0x00, 0x0b, 0x00, 0xff, 0xff, 0xff],
            ]
        );
    }

    #[test]
    fn test_unknown_and_invalid() {
        let presets = Presets::from_json(JSON).unwrap();
        assert!(matches!(
            presets.apply_preset("disco"),
            Err(KeyboardError::UnknownPreset(name)) if name == "disco"
        ));
        assert!(matches!(
            presets.parse_preset("disco"),
            Err(KeyboardError::UnknownPreset(_))
        ));
        assert_eq!(presets.parse_preset("off").unwrap(), "off");
        assert!(matches!(
            presets.apply_preset("broken"),
            Err(KeyboardError::InvalidPreset { .. })
        ));
    }

    #[test]
    fn test_merge_replaces() {
        let mut presets = Presets::from_json(JSON).unwrap();
        let mut extra = Presets::new();
        extra.insert("off", vec!["00".to_string()]);
        extra.insert("party", vec![]);
        presets.merge(extra);
        assert_eq!(presets.len(), 4);
        assert_eq!(presets.apply_preset("off").unwrap(), vec![vec![0u8]]);
    }
}
