//! Platform keycode names
//!
//! Platform keycodes are X11 hardware keycodes (evdev code + 8), which is
//! what the desktop reports for a key press. `FN` is not reported by the
//! desktop at all; it gets a private code so it can still carry a color.

use crate::Keycode;

/// Private platform keycode for the Fn key
pub const FN: Keycode = 666;

/// Display names of the platform keycodes, sorted by keycode
pub const KEY_NAMES: &[(Keycode, &str)] = &[
    (9, "Esc"),
    (10, "1"),
    (11, "2"),
    (12, "3"),
    (13, "4"),
    (14, "5"),
    (15, "6"),
    (16, "7"),
    (17, "8"),
    (18, "9"),
    (19, "0"),
    (20, "-"),
    (21, "="),
    (22, "Backspace"),
    (23, "Tab"),
    (24, "Q"),
    (25, "W"),
    (26, "E"),
    (27, "R"),
    (28, "T"),
    (29, "Y"),
    (30, "U"),
    (31, "I"),
    (32, "O"),
    (33, "P"),
    (34, "["),
    (35, "]"),
    (36, "Enter"),
    (37, "LCtrl"),
    (38, "A"),
    (39, "S"),
    (40, "D"),
    (41, "F"),
    (42, "G"),
    (43, "H"),
    (44, "J"),
    (45, "K"),
    (46, "L"),
    (47, ";"),
    (48, "'"),
    (49, "`"),
    (50, "LShift"),
    (51, "\\"),
    (52, "Z"),
    (53, "X"),
    (54, "C"),
    (55, "V"),
    (56, "B"),
    (57, "N"),
    (58, "M"),
    (59, ","),
    (60, "."),
    (61, "/"),
    (62, "RShift"),
    (63, "KP*"),
    (64, "LAlt"),
    (65, "Space"),
    (66, "CapsLock"),
    (67, "F1"),
    (68, "F2"),
    (69, "F3"),
    (70, "F4"),
    (71, "F5"),
    (72, "F6"),
    (73, "F7"),
    (74, "F8"),
    (75, "F9"),
    (76, "F10"),
    (77, "NumLock"),
    (78, "ScrollLock"),
    (79, "KP7"),
    (80, "KP8"),
    (81, "KP9"),
    (82, "KP-"),
    (83, "KP4"),
    (84, "KP5"),
    (85, "KP6"),
    (86, "KP+"),
    (87, "KP1"),
    (88, "KP2"),
    (89, "KP3"),
    (90, "KP0"),
    (91, "KP."),
    (94, "<>"),
    (95, "F11"),
    (96, "F12"),
    (104, "KPEnter"),
    (105, "RCtrl"),
    (106, "KP/"),
    (107, "PrtSc"),
    (108, "RAlt"),
    (110, "Home"),
    (111, "Up"),
    (112, "PgUp"),
    (113, "Left"),
    (114, "Right"),
    (115, "End"),
    (116, "Down"),
    (117, "PgDn"),
    (118, "Insert"),
    (119, "Delete"),
    (127, "Pause"),
    (133, "Super"),
    (135, "Menu"),
    (FN, "Fn"),
];

/// Name of a platform keycode
pub fn key_name(keycode: Keycode) -> Option<&'static str> {
    KEY_NAMES
        .binary_search_by_key(&keycode, |&(k, _)| k)
        .ok()
        .map(|i| KEY_NAMES[i].1)
}

/// Platform keycode for a key name (case-insensitive)
pub fn keycode_from_name(name: &str) -> Option<Keycode> {
    KEY_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|&(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_sorted_and_unique() {
        assert!(KEY_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(key_name(9), Some("Esc"));
        assert_eq!(key_name(FN), Some("Fn"));
        assert_eq!(key_name(92), None);
        assert_eq!(keycode_from_name("esc"), Some(9));
        assert_eq!(keycode_from_name("KPEnter"), Some(104));
        assert_eq!(keycode_from_name("Hyper"), None);
    }
}
