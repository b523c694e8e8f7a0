//! Known USB identifiers of MSI per-key RGB keyboards
//!
//! The keyboards are built by SteelSeries and enumerate under its vendor ID.
//! Model identity is not derivable from the ID; the user selects the model.

use crate::types::UsbId;

/// SteelSeries vendor ID used by MSI laptop keyboards
pub const VENDOR_ID: u16 = 0x1038;

/// Product IDs of known per-key RGB keyboards
pub const PRODUCT_IDS: &[u16] = &[
    0x1122, // GE63/GE73/GS65/... "SteelSeries KLC"
];

/// Default identifier used when the user does not give one
pub const DEFAULT_ID: UsbId = UsbId::new(VENDOR_ID, 0x1122);

/// All known identifiers
pub fn known_ids() -> impl Iterator<Item = UsbId> {
    PRODUCT_IDS.iter().map(|&pid| UsbId::new(VENDOR_ID, pid))
}

#[inline]
pub fn is_known_id(id: UsbId) -> bool {
    id.vid == VENDOR_ID && PRODUCT_IDS.contains(&id.pid)
}
