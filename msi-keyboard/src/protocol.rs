//! Key-color report framing
//!
//! Key colors go out as one feature report per region:
//!
//! ```text
//! [0x0e, 0x00, region_id, 0x00, r0, g0, b0, r1, g1, b1, ...]
//! ```
//!
//! with one triplet per region slot in slot order. The refresh output
//! report makes the uploaded colors visible.

use std::collections::BTreeMap;

use tracing::warn;

use crate::color::ColorValue;
use crate::region::{Region, RegionTable, PADDING};
use crate::{ColorMap, Keycode};

/// Report IDs and fixed sizes
pub mod report {
    /// Feature report carrying one region's key colors
    pub const KEY_COLORS: u8 = 0x0e;
    /// Output report committing uploaded colors
    pub const REFRESH: u8 = 0x09;

    /// Bytes before the first color triplet
    pub const KEY_COLORS_HEADER_LEN: usize = 4;
    pub const REFRESH_LEN: usize = 64;
    pub const TRIPLET_LEN: usize = 3;
}

/// Length of a region's key-color report
pub fn region_packet_len(region: &Region) -> usize {
    report::KEY_COLORS_HEADER_LEN + report::TRIPLET_LEN * region.slot_count()
}

/// Split a hardware color map by region name
///
/// A keycode no region addresses cannot be sent and is dropped with a warning.
pub fn partition_by_region(
    colors: &ColorMap,
    regions: &RegionTable,
) -> BTreeMap<&'static str, ColorMap> {
    let mut parts: BTreeMap<&'static str, ColorMap> = BTreeMap::new();
    for (&keycode, &color) in colors {
        match regions.region_of(keycode) {
            Some(region) => {
                parts.entry(region.name).or_default().insert(keycode, color);
            }
            None => warn!("Hardware keycode {} is in no region, dropped", keycode),
        }
    }
    parts
}

fn encode_region(region: &Region, mut slot_color: impl FnMut(Keycode) -> ColorValue) -> Vec<u8> {
    let mut packet = Vec::with_capacity(region_packet_len(region));
    packet.extend_from_slice(&[report::KEY_COLORS, 0x00, region.id, 0x00]);
    for &slot in &region.slots {
        packet.extend_from_slice(&slot_color(slot).to_bytes());
    }
    packet
}

/// Key-color report for one region; padding and unset slots are black
pub fn build_region_packet(region: &Region, colors: &ColorMap) -> Vec<u8> {
    encode_region(region, |slot| {
        if slot == PADDING {
            ColorValue::BLACK
        } else {
            colors.get(&slot).copied().unwrap_or(ColorValue::BLACK)
        }
    })
}

/// Key-color report with every slot set to `color`
pub fn build_fill_packet(region: &Region, color: ColorValue) -> Vec<u8> {
    encode_region(region, |_| color)
}

/// Key-color report with an independent random color per slot
pub fn build_random_packet(region: &Region, rng: &mut fastrand::Rng) -> Vec<u8> {
    encode_region(region, |_| ColorValue::random(rng))
}

/// Refresh report that commits previously sent colors
pub fn build_refresh_packet() -> Vec<u8> {
    let mut packet = vec![0u8; report::REFRESH_LEN];
    packet[0] = report::REFRESH;
    packet
}
