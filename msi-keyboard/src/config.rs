//! Text color configuration
//!
//! One assignment per line: `<keys> <effect> <color>`. `keys` is a comma
//! list of integer keycodes, bulk group names, or `all`. The effect field is
//! carried for compatibility and otherwise ignored; only `steady` is written.
//!
//! Saving picks the most common color for an `all` line, then emits every
//! bulk group that is uniformly some other color, then one line per
//! remaining color. Loading the saved text reproduces the color map exactly.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::bulk::{BulkGroups, ALL};
use crate::color::ColorValue;
use crate::error::KeyboardError;
use crate::layout::KeyboardLayout;
use crate::Keycode;

/// Effect written on every saved line
pub const STEADY: &str = "steady";

/// One key selector of a config line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTarget {
    All,
    Group(String),
    Keycode(Keycode),
}

/// A parsed config line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub targets: Vec<KeyTarget>,
    pub effect: String,
    pub color: ColorValue,
}

/// Encoder/decoder for the text format, bound to one bulk group table
#[derive(Debug, Clone, Copy)]
pub struct ConfigCodec<'a> {
    groups: &'a BulkGroups,
}

impl<'a> ConfigCodec<'a> {
    pub fn new(groups: &'a BulkGroups) -> Self {
        Self { groups }
    }

    /// Encode the layout's colors in as few lines as the bulk groups allow
    pub fn save(&self, layout: &KeyboardLayout) -> Vec<String> {
        let colors = layout.color_map();
        let main = main_color(colors.values().copied());
        let mut lines = vec![format_line(ALL, main)];

        let mut covered = BTreeSet::new();
        for group in self.groups.iter() {
            let mut present = group.keycodes.iter().filter_map(|k| colors.get(k));
            let Some(&first) = present.next() else {
                continue;
            };
            if first != main && present.all(|&c| c == first) {
                lines.push(format_line(&group.name, first));
                covered.extend(group.keycodes.iter().copied());
            }
        }

        let mut remainder: BTreeMap<ColorValue, Vec<Keycode>> = BTreeMap::new();
        for (&keycode, &color) in &colors {
            if color != main && !covered.contains(&keycode) {
                remainder.entry(color).or_default().push(keycode);
            }
        }
        for (color, keycodes) in remainder {
            let keys: Vec<String> = keycodes.iter().map(|k| k.to_string()).collect();
            lines.push(format_line(&keys.join(","), color));
        }

        debug!("Encoded {} keys in {} lines", colors.len(), lines.len());
        lines
    }

    /// Parse config text without touching any layout
    ///
    /// Empty lines are skipped. Any other line that does not have exactly
    /// three fields, names an unknown key token, or has an invalid color is
    /// an error for the whole text.
    pub fn parse(&self, text: &str) -> Result<Vec<ConfigLine>, KeyboardError> {
        let mut parsed = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let malformed = |reason: String| KeyboardError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
                reason,
            };

            let fields: Vec<&str> = line.split(' ').collect();
            let &[keys, effect, color] = fields.as_slice() else {
                return Err(malformed(format!("expected 3 fields, found {}", fields.len())));
            };
            let targets = keys
                .split(',')
                .map(|token| self.parse_target(token))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| malformed(format!("unknown key token in {keys:?}")))?
                .into_iter()
                .flatten()
                .collect();
            let color = ColorValue::parse(color).map_err(|e| malformed(e.to_string()))?;

            parsed.push(ConfigLine {
                targets,
                effect: effect.to_string(),
                color,
            });
        }
        Ok(parsed)
    }

    /// `None` for a token that is not a key selector at all, `Some(None)`
    /// for an integer that can never name a key
    fn parse_target(&self, token: &str) -> Option<Option<KeyTarget>> {
        if token == ALL {
            return Some(Some(KeyTarget::All));
        }
        if self.groups.get(token).is_some() {
            return Some(Some(KeyTarget::Group(token.to_string())));
        }
        let value = token.parse::<i64>().ok()?;
        match Keycode::try_from(value) {
            Ok(keycode) => Some(Some(KeyTarget::Keycode(keycode))),
            Err(_) => {
                warn!("Keycode {} is out of range, skipping", value);
                Some(None)
            }
        }
    }

    /// Decode config text onto the layout
    ///
    /// Later lines override earlier ones. A keycode missing from the layout
    /// is skipped with a warning. On a parse error the layout is unchanged.
    pub fn load(&self, layout: &mut KeyboardLayout, text: &str) -> Result<(), KeyboardError> {
        for line in self.parse(text)? {
            for target in &line.targets {
                match target {
                    KeyTarget::All => layout.fill(line.color),
                    KeyTarget::Group(name) => {
                        let Some(group) = self.groups.get(name) else {
                            continue;
                        };
                        for &keycode in &group.keycodes {
                            if layout.contains(keycode) {
                                layout.set_color(keycode, line.color);
                            }
                        }
                    }
                    KeyTarget::Keycode(keycode) => {
                        // set_color warns on a miss
                        layout.set_color(*keycode, line.color);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        layout: &KeyboardLayout,
        path: P,
    ) -> Result<(), KeyboardError> {
        let mut text = String::new();
        for line in self.save(layout) {
            text.push_str(&line);
            text.push('\n');
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Load a config file; a missing file leaves the layout as it was
    pub fn load_from_file<P: AsRef<Path>>(
        &self,
        layout: &mut KeyboardLayout,
        path: P,
    ) -> Result<(), KeyboardError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => self.load(layout, &text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Config file {} not found", path.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Most frequent color; equal counts go to the lowest color value
fn main_color(colors: impl Iterator<Item = ColorValue>) -> ColorValue {
    let mut histogram: BTreeMap<ColorValue, usize> = BTreeMap::new();
    for color in colors {
        *histogram.entry(color).or_default() += 1;
    }
    histogram
        .into_iter()
        .fold(None, |best: Option<(ColorValue, usize)>, (color, count)| match best {
            Some((_, max)) if max >= count => best,
            _ => Some((color, count)),
        })
        .map(|(color, _)| color)
        .unwrap_or(ColorValue::BLACK)
}

fn format_line(keys: &str, color: ColorValue) -> String {
    format!("{keys} {STEADY} {}", color.display_name())
}
