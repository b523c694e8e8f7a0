//! End-to-end lighting through a recording transport.

use msi_keyboard::{
    BulkGroups, ColorMap, ColorValue, KeyboardError, KeyboardInterface, ModelTables, MsiKeymap,
    Presets, RegionTable,
};
use msi_transport::{RecordingTransport, DEFAULT_ID};

fn tables() -> ModelTables {
    ModelTables {
        // Esc, 1, A, KP Enter
        keymap: MsiKeymap::new([(9, 41), (10, 30), (38, 4), (104, 88)]),
        regions: RegionTable::msi_default(),
        bulk: BulkGroups::msi_default(),
        presets: Presets::from_json(r#"{"blink": ["0e002a00ff0000", "0e00"]}"#).unwrap(),
    }
}

#[test]
fn config_text_reaches_the_wire() {
    let recorder = RecordingTransport::new(DEFAULT_ID);
    let keyboard = KeyboardInterface::new(&recorder, tables());

    let mut layout = keyboard.tables().default_layout();
    assert_eq!(layout.len(), 4);
    keyboard
        .tables()
        .codec()
        .load(&mut layout, "all steady black\n38 steady 010203\nnumpad steady white\n")
        .unwrap();

    keyboard.set_layout(&layout).unwrap();
    keyboard.refresh().unwrap();

    // alphanum (A, 1), modifiers (Esc), numpad (KP Enter); no enter-region key
    let features = recorder.feature_reports();
    assert_eq!(features.len(), 3);
    assert_eq!(&features[0][..4], &[0x0e, 0x00, 0x2a, 0x00]);
    assert_eq!(&features[1][..4], &[0x0e, 0x00, 0x18, 0x00]);
    assert_eq!(&features[2][..4], &[0x0e, 0x00, 0x24, 0x00]);
    assert!(features.iter().all(|f| f.len() == 130));

    // HID 4 is the first alphanum slot
    assert_eq!(&features[0][4..7], &[1, 2, 3]);
    // HID 88 is slot 24 of the numpad region (64..=99)
    let kp_enter = 4 + 3 * (88 - 64);
    assert_eq!(&features[2][kp_enter..kp_enter + 3], &[0xff, 0xff, 0xff]);

    let outputs = recorder.output_reports();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0][0], 0x09);
}

#[test]
fn unmapped_keycode_sends_nothing() {
    let recorder = RecordingTransport::new(DEFAULT_ID);
    let keyboard = KeyboardInterface::new(&recorder, tables());

    let colors = ColorMap::from([(9, ColorValue::WHITE), (500, ColorValue::WHITE)]);
    assert!(matches!(
        keyboard.set_colors(&colors),
        Err(KeyboardError::UnmappedKeycode(500))
    ));
    assert!(recorder.reports().is_empty());
}

#[test]
fn fill_and_random_send_every_region() {
    let recorder = RecordingTransport::new(DEFAULT_ID);
    let keyboard = KeyboardInterface::new(&recorder, tables());

    keyboard.set_color_all(ColorValue::new(0x10, 0x20, 0x30)).unwrap();
    let features = recorder.feature_reports();
    assert_eq!(features.len(), 4);
    assert!(features
        .iter()
        .all(|f| f[4..].chunks(3).all(|c| c == [0x10, 0x20, 0x30])));

    recorder.clear();
    keyboard
        .set_random_colors_with(&mut fastrand::Rng::with_seed(1))
        .unwrap();
    assert_eq!(recorder.feature_reports().len(), 4);
}

#[test]
fn presets_replay_verbatim() {
    let recorder = RecordingTransport::new(DEFAULT_ID);
    let keyboard = KeyboardInterface::new(&recorder, tables());

    keyboard.set_preset("blink").unwrap();
    assert_eq!(
        recorder.feature_reports(),
        vec![vec![0x0e, 0x00, 0x2a, 0x00, 0xff, 0x00, 0x00], vec![0x0e, 0x00]]
    );

    assert!(matches!(
        keyboard.set_preset("nope"),
        Err(KeyboardError::UnknownPreset(_))
    ));
}

#[test]
fn saved_config_reloads_identically() {
    let tables = tables();
    let codec = tables.codec();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.msic");

    let mut layout = tables.default_layout();
    layout.set_color(9, ColorValue::parse("orange").unwrap());
    layout.set_color(104, ColorValue::parse("teal").unwrap());
    codec.save_to_file(&layout, &path).unwrap();

    let mut reloaded = tables.default_layout();
    codec.load_from_file(&mut reloaded, &path).unwrap();
    assert_eq!(reloaded.color_map(), layout.color_map());
}
