//! Integration tests for the config → report pipeline.
//!
//! These drive the device façade with the builtin model tables over a
//! recording transport, so no keyboard is needed.

use msi_keyboard::{ColorValue, KeyboardLayout, LogicalKey};
use msi_perkeyrgb::{Device, DriverError, ModelRegistry};
use msi_transport::{RecordingTransport, ReportKind, DEFAULT_ID};

fn device(model: &str) -> Device<RecordingTransport> {
    let registry = ModelRegistry::with_builtins();
    Device::with_transport(&registry, model, RecordingTransport::new(DEFAULT_ID)).unwrap()
}

/// Color triplet of a hardware keycode in a key-color report
fn slot_color(report: &[u8], region_slots: &[u16], hardware: u16) -> [u8; 3] {
    let slot = region_slots.iter().position(|&k| k == hardware).unwrap();
    let at = 4 + 3 * slot;
    [report[at], report[at + 1], report[at + 2]]
}

// ── apply ──

#[test]
fn apply_config_sends_regions_then_refresh() {
    let device = device("GE63");
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("colors.msic");
    std::fs::write(&config, "all steady white\nf_row steady red\n38 steady 0000ff\n").unwrap();

    let layout = device.apply_config(&config, None).unwrap();
    assert_eq!(layout.get(38).unwrap().color, ColorValue::from_u32(0x0000ff));

    let regions = device.tables().regions.clone();
    let transport = device.into_transport();
    let reports = transport.reports();

    // every region holds at least one key of the full-size keymap
    assert_eq!(reports.len(), 5);
    assert!(reports[..4].iter().all(|r| r.kind == ReportKind::Feature));
    assert_eq!(reports[4].kind, ReportKind::Output);
    assert_eq!(reports[4].data[0], 0x09);

    let alphanum = regions.get("alphanum").unwrap();
    let report = &reports[0].data;
    assert_eq!(report[2], 0x2a);
    // A (X11 38 → HID 4) blue, F1 (67 → 58) red, Q (24 → 20) white
    assert_eq!(slot_color(report, &alphanum.slots, 4), [0, 0, 0xff]);
    assert_eq!(slot_color(report, &alphanum.slots, 58), [0xff, 0, 0]);
    assert_eq!(slot_color(report, &alphanum.slots, 20), [0xff, 0xff, 0xff]);

    // F11 (95 → 68) sits in the numpad region
    let numpad = regions.get("numpad").unwrap();
    assert_eq!(slot_color(&reports[3].data, &numpad.slots, 68), [0xff, 0, 0]);
}

#[test]
fn compact_model_sends_no_numpad_keys() {
    let device = device("GS65");
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("colors.msic");
    std::fs::write(&config, "all steady white\nnumpad steady red\n").unwrap();

    device.apply_config(&config, None).unwrap();
    let regions = device.tables().regions.clone();
    let transport = device.into_transport();
    let features = transport.feature_reports();

    let numpad = regions.get("numpad").unwrap();
    let report = features.iter().find(|r| r[2] == numpad.id).unwrap();
    // KP Enter (HID 88) is not on this model, so its slot stays dark
    assert_eq!(slot_color(report, &numpad.slots, 88), [0, 0, 0]);
    // F11 is, and it is white
    assert_eq!(slot_color(report, &numpad.slots, 68), [0xff, 0xff, 0xff]);
}

#[test]
fn malformed_config_sends_nothing() {
    let device = device("GE63");
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("colors.msic");
    std::fs::write(&config, "all steady white\n38 steady\n").unwrap();

    let err = device.apply_config(&config, None).err().unwrap();
    assert!(matches!(err, DriverError::Keyboard(_)));
    assert!(device.into_transport().reports().is_empty());
}

#[test]
fn missing_config_applies_black_layout() {
    let device = device("GE63");
    let dir = tempfile::tempdir().unwrap();

    let layout = device
        .apply_config(&dir.path().join("none.msic"), None)
        .unwrap();
    assert!(layout.iter().all(|k| k.color == ColorValue::BLACK));

    let features = device.into_transport().feature_reports();
    assert!(features.iter().all(|r| r[4..].iter().all(|&b| b == 0)));
}

#[test]
fn bindings_file_limits_the_layout() {
    let device = device("GE63");
    let dir = tempfile::tempdir().unwrap();
    let bindings = dir.path().join("GE63.json");
    let config = dir.path().join("colors.msic");

    let mut layout = KeyboardLayout::new();
    layout.insert(LogicalKey::new(9, "Esc"));
    layout.insert(LogicalKey::new(38, "A"));
    layout.save_bindings(&bindings).unwrap();
    std::fs::write(&config, "all steady red\n").unwrap();

    let applied = device.apply_config(&config, Some(bindings.as_path())).unwrap();
    assert_eq!(applied.len(), 2);

    // Esc is a modifier-region key, A an alphanumeric one
    let features = device.into_transport().feature_reports();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0][2], 0x2a);
    assert_eq!(features[1][2], 0x18);
}

// ── whole-keyboard operations ──

#[test]
fn presets_and_fills() {
    let device = device("GT75");
    device.preset("white").unwrap();
    device.steady(ColorValue::parse("Orange").unwrap()).unwrap();
    device.random().unwrap();
    assert!(matches!(
        device.preset("disco"),
        Err(DriverError::Keyboard(msi_keyboard::KeyboardError::UnknownPreset(_)))
    ));

    let reports = device.into_transport().reports();
    let refreshes = reports.iter().filter(|r| r.kind == ReportKind::Output).count();
    assert_eq!(refreshes, 3);
    // preset: 4 regions, steady: 4 regions
    assert!(reports[5..9]
        .iter()
        .all(|r| r.data[4..].chunks(3).all(|c| c == [0xff, 0xa5, 0x00])));
}

// ── config file maintenance ──

#[test]
fn set_key_then_compact_roundtrip() {
    let device = device("GE63");
    let codec = device.tables().codec();
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("colors.msic");
    std::fs::write(&config, "all steady black\n10,11,12 steady red\n").unwrap();

    let mut layout = device.layout(None).unwrap();
    device.load_config(&mut layout, &config).unwrap();
    assert!(layout.set_color(111, ColorValue::parse("lime").unwrap()));
    codec.save_to_file(&layout, &config).unwrap();

    let text = std::fs::read_to_string(&config).unwrap();
    // remainder lines go by ascending color value
    assert_eq!(text, "all steady black\n111 steady lime\n10,11,12 steady red\n");

    let mut reloaded = device.layout(None).unwrap();
    device.load_config(&mut reloaded, &config).unwrap();
    assert_eq!(reloaded.color_map(), layout.color_map());
}
