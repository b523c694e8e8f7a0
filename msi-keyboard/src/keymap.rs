//! Platform → hardware keycode translation

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::KeyboardError;
use crate::{ColorMap, Keycode};

/// Per-model mapping from platform keycode to the firmware's keycode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsiKeymap {
    map: BTreeMap<Keycode, Keycode>,
}

impl MsiKeymap {
    pub fn new(pairs: impl IntoIterator<Item = (Keycode, Keycode)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Copy without the given platform keycodes
    pub fn without(&self, removed: &[Keycode]) -> Self {
        Self {
            map: self
                .map
                .iter()
                .filter(|(k, _)| !removed.contains(k))
                .map(|(&k, &v)| (k, v))
                .collect(),
        }
    }

    pub fn hardware_keycode(&self, platform: Keycode) -> Option<Keycode> {
        self.map.get(&platform).copied()
    }

    /// Platform keycodes covered, ascending
    pub fn platform_keycodes(&self) -> impl Iterator<Item = Keycode> + '_ {
        self.map.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Re-key a platform color map by hardware keycode
    ///
    /// A platform keycode without an entry is an error in the model data.
    pub fn translate(&self, colors: &ColorMap) -> Result<ColorMap, KeyboardError> {
        let mut out = ColorMap::new();
        for (&platform, &color) in colors {
            let hardware = self
                .hardware_keycode(platform)
                .ok_or(KeyboardError::UnmappedKeycode(platform))?;
            out.insert(hardware, color);
        }
        debug!("Translated {} keys to hardware keycodes", out.len());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorValue;

    #[test]
    fn test_translate() {
        let keymap = MsiKeymap::new([(9, 41), (10, 30)]);
        let colors = ColorMap::from([(9, ColorValue::WHITE), (10, ColorValue::BLACK)]);
        let hw = keymap.translate(&colors).unwrap();
        assert_eq!(hw, ColorMap::from([(41, ColorValue::WHITE), (30, ColorValue::BLACK)]));
    }

    #[test]
    fn test_translate_unmapped_fails() {
        let keymap = MsiKeymap::new([(9, 41)]);
        let colors = ColorMap::from([(9, ColorValue::WHITE), (200, ColorValue::WHITE)]);
        assert!(matches!(
            keymap.translate(&colors),
            Err(KeyboardError::UnmappedKeycode(200))
        ));
    }

    #[test]
    fn test_without() {
        let keymap = MsiKeymap::new([(9, 41), (10, 30), (11, 31)]).without(&[10]);
        assert_eq!(keymap.platform_keycodes().collect::<Vec<_>>(), vec![9, 11]);
        assert_eq!(keymap.hardware_keycode(10), None);
    }
}
