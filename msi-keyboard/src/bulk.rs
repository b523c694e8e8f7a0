//! Named keycode groups used to shorten color config files
//!
//! Groups are keyed by platform keycodes and may overlap. They have no
//! meaning on the wire.

use crate::Keycode;

/// Config token selecting every key of the layout
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkGroup {
    pub name: String,
    pub keycodes: Vec<Keycode>,
}

impl BulkGroup {
    pub fn new(name: impl Into<String>, keycodes: impl IntoIterator<Item = Keycode>) -> Self {
        Self {
            name: name.into(),
            keycodes: keycodes.into_iter().collect(),
        }
    }

    pub fn contains(&self, keycode: Keycode) -> bool {
        self.keycodes.contains(&keycode)
    }
}

/// Ordered set of bulk groups; iteration order is the config output order
#[derive(Debug, Clone, Default)]
pub struct BulkGroups {
    groups: Vec<BulkGroup>,
}

impl BulkGroups {
    pub fn new(groups: Vec<BulkGroup>) -> Self {
        Self { groups }
    }

    /// Groups for the default X11 keycode layout of the laptops
    pub fn msi_default() -> Self {
        Self::new(vec![
            BulkGroup::new("numpad", [104, 106, 63, 77].into_iter().chain(79..=91)),
            BulkGroup::new("arrows", [111, 113, 116, 114]),
            BulkGroup::new("f_row", (67..=76).chain([95, 96])),
            BulkGroup::new("num_row", 10..=21),
            BulkGroup::new(
                "characters",
                (24..=35).chain(38..=48).chain(52..=61).chain([65]),
            ),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&BulkGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BulkGroup> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups() {
        let groups = BulkGroups::msi_default();
        assert_eq!(
            groups.names().collect::<Vec<_>>(),
            vec!["numpad", "arrows", "f_row", "num_row", "characters"]
        );
        assert_eq!(groups.get("numpad").unwrap().keycodes.len(), 17);
        assert_eq!(groups.get("f_row").unwrap().keycodes.len(), 12);
        assert_eq!(groups.get("num_row").unwrap().keycodes.len(), 12);
        assert_eq!(groups.get("characters").unwrap().keycodes.len(), 34);
        assert!(groups.get("arrows").unwrap().contains(116));
        assert!(groups.get(ALL).is_none());
    }
}
