// Builtin model families
// Keymaps and presets for the known per-key RGB laptops (no external files needed)

use msi_keyboard::{
    BulkGroups, Keycode, KeyboardError, ModelTables, MsiKeymap, Presets, RegionTable,
};

/// Models with a numeric keypad
pub const FULL_SIZE_MODELS: &[&str] = &[
    "GE63", "GE73", "GE75", "GL63", "GS63", "GS73", "GS75", "GT63", "GT75", "GX63",
];

/// Models without a numeric keypad
pub const COMPACT_MODELS: &[&str] = &["GS65"];

const FULL_SIZE_PRESETS: &str = include_str!("../../data/presets/full_size.json");
const COMPACT_PRESETS: &str = include_str!("../../data/presets/compact.json");

/// X11 keycode → firmware (USB HID usage) keycode for the full-size layout
pub const DEFAULT_KEYMAP: &[(Keycode, Keycode)] = &[
    (9, 41),   // Esc
    (10, 30),  // 1
    (11, 31),
    (12, 32),
    (13, 33),
    (14, 34),
    (15, 35),
    (16, 36),
    (17, 37),
    (18, 38),
    (19, 39),  // 0
    (20, 45),  // -
    (21, 46),  // =
    (22, 42),  // Backspace
    (23, 43),  // Tab
    (24, 20),  // Q
    (25, 26),
    (26, 8),
    (27, 21),
    (28, 23),
    (29, 28),
    (30, 24),
    (31, 12),
    (32, 18),
    (33, 19),  // P
    (34, 47),  // [
    (35, 48),  // ]
    (36, 40),  // Enter
    (37, 224), // LCtrl
    (38, 4),   // A
    (39, 22),
    (40, 7),
    (41, 9),
    (42, 10),
    (43, 11),
    (44, 13),
    (45, 14),
    (46, 15),  // L
    (47, 51),  // ;
    (48, 52),  // '
    (49, 53),  // `
    (50, 225), // LShift
    (51, 49),  // backslash
    (52, 29),  // Z
    (53, 27),
    (54, 6),
    (55, 25),
    (56, 5),
    (57, 17),
    (58, 16),  // M
    (59, 54),  // ,
    (60, 55),  // .
    (61, 56),  // /
    (62, 229), // RShift
    (63, 85),  // KP*
    (64, 226), // LAlt
    (65, 44),  // Space
    (66, 57),  // CapsLock
    (67, 58),  // F1
    (68, 59),
    (69, 60),
    (70, 61),
    (71, 62),
    (72, 63),
    (73, 64),
    (74, 65),
    (75, 66),
    (76, 67),  // F10
    (77, 83),  // NumLock
    (78, 71),  // ScrollLock
    (79, 95),  // KP7
    (80, 96),
    (81, 97),
    (82, 86),  // KP-
    (83, 92),  // KP4
    (84, 93),
    (85, 94),
    (86, 87),  // KP+
    (87, 89),  // KP1
    (88, 90),
    (89, 91),
    (90, 98),  // KP0
    (91, 99),  // KP.
    (94, 100), // <>
    (95, 68),  // F11
    (96, 69),  // F12
    (104, 88), // KPEnter
    (105, 228), // RCtrl
    (106, 84), // KP/
    (107, 70), // PrtSc
    (108, 230), // RAlt
    (110, 74), // Home
    (111, 82), // Up
    (112, 75), // PgUp
    (113, 80), // Left
    (114, 79), // Right
    (115, 77), // End
    (116, 81), // Down
    (117, 78), // PgDn
    (118, 73), // Insert
    (119, 76), // Delete
    (127, 72), // Pause
    (133, 227), // Super
    (135, 101), // Menu
    (msi_keyboard::keycodes::FN, 240),
];

/// X11 keycodes of the numeric keypad
pub const NUMPAD_KEYCODES: &[Keycode] = &[
    63, 77, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 104, 106,
];

/// Tables for the full-size family
pub fn full_size() -> Result<ModelTables, KeyboardError> {
    Ok(ModelTables {
        keymap: MsiKeymap::new(DEFAULT_KEYMAP.iter().copied()),
        regions: RegionTable::msi_default(),
        bulk: BulkGroups::msi_default(),
        presets: Presets::from_json(FULL_SIZE_PRESETS)?,
    })
}

/// Tables for the compact family: full-size minus the keypad
pub fn compact() -> Result<ModelTables, KeyboardError> {
    Ok(ModelTables {
        keymap: MsiKeymap::new(DEFAULT_KEYMAP.iter().copied()).without(NUMPAD_KEYCODES),
        regions: RegionTable::msi_default(),
        bulk: BulkGroups::msi_default(),
        presets: Presets::from_json(COMPACT_PRESETS)?,
    })
}
