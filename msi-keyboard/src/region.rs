//! Hardware key regions
//!
//! The firmware groups hardware keycodes into regions. Each region is
//! addressed by one feature report whose color triplets follow the region's
//! slot order exactly; keys are identified by position, not by keycode.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::Keycode;

/// Slot value that never addresses a key
pub const PADDING: Keycode = 0;

/// Slots per region on every known model family
pub const SLOTS_PER_REGION: usize = 42;

/// A named, fixed-size group of hardware key slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    /// Region selector byte placed in the report header
    pub id: u8,
    /// Hardware keycodes in wire order, `PADDING` for unused positions
    pub slots: Vec<Keycode>,
}

impl Region {
    pub fn new(name: &'static str, id: u8, slots: Vec<Keycode>) -> Self {
        Self { name, id, slots }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Hardware keycodes addressed by this region, padding excluded
    pub fn keycodes(&self) -> impl Iterator<Item = Keycode> + '_ {
        self.slots.iter().copied().filter(|&k| k != PADDING)
    }
}

/// Build a slot list from keycode runs followed by `padding` unused slots
pub fn slots(runs: &[RangeInclusive<Keycode>], padding: usize) -> Vec<Keycode> {
    runs.iter()
        .cloned()
        .flatten()
        .chain(std::iter::repeat(PADDING).take(padding))
        .collect()
}

/// Ordered region list with a keycode → region index
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: Vec<Region>,
    index: HashMap<Keycode, usize>,
}

impl RegionTable {
    /// Index the regions; a keycode listed twice belongs to the first region
    pub fn new(regions: Vec<Region>) -> Self {
        let mut index = HashMap::new();
        for (i, region) in regions.iter().enumerate() {
            for keycode in region.keycodes() {
                index.entry(keycode).or_insert(i);
            }
        }
        Self { regions, index }
    }

    /// Region layout shared by the per-key RGB laptop keyboards
    pub fn msi_default() -> Self {
        Self::new(vec![
            Region::new("alphanum", 0x2a, slots(&[4..=39, 58..=63], 0)),
            Region::new(
                "enter",
                0x0b,
                slots(
                    &[
                        40..=40,
                        49..=50,
                        100..=100,
                        135..=139,
                        144..=145,
                    ],
                    31,
                ),
            ),
            Region::new(
                "modifiers",
                0x18,
                slots(
                    &[41..=48, 51..=57, 101..=101, 224..=230, 240..=240],
                    18,
                ),
            ),
            Region::new("numpad", 0x24, slots(&[64..=99], 6)),
        ])
    }

    pub fn region_of(&self, keycode: Keycode) -> Option<&Region> {
        self.index.get(&keycode).map(|&i| &self.regions[i])
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions_are_full_size() {
        let table = RegionTable::msi_default();
        assert_eq!(table.len(), 4);
        for region in &table {
            assert_eq!(region.slot_count(), SLOTS_PER_REGION, "{}", region.name);
        }
    }

    #[test]
    fn test_default_real_key_counts() {
        let table = RegionTable::msi_default();
        let counts: Vec<(&str, usize)> =
            table.iter().map(|r| (r.name, r.keycodes().count())).collect();
        assert_eq!(
            counts,
            vec![("alphanum", 42), ("enter", 11), ("modifiers", 24), ("numpad", 36)]
        );
    }

    #[test]
    fn test_default_regions_do_not_overlap() {
        let table = RegionTable::msi_default();
        let total: usize = table.iter().map(|r| r.keycodes().count()).sum();
        assert_eq!(table.index.len(), total);
    }

    #[test]
    fn test_region_lookup() {
        let table = RegionTable::msi_default();
        assert_eq!(table.region_of(4).unwrap().name, "alphanum");
        assert_eq!(table.region_of(40).unwrap().name, "enter");
        assert_eq!(table.region_of(240).unwrap().name, "modifiers");
        assert_eq!(table.region_of(99).unwrap().name, "numpad");
        assert!(table.region_of(231).is_none());
        assert!(table.region_of(PADDING).is_none());
    }

    #[test]
    fn test_slot_order_is_wire_order() {
        let table = RegionTable::msi_default();
        let enter = table.get("enter").unwrap();
        assert_eq!(&enter.slots[..4], &[40, 49, 50, 100]);
        assert_eq!(enter.slots[11], PADDING);
    }
}
