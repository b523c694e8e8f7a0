//! Device façade
//!
//! Ties a model's tables to an opened transport: resolve the model, parse
//! the USB identifier, open the keyboard, then push colors and refresh.

use std::path::Path;

use msi_keyboard::{ColorValue, KeyboardInterface, KeyboardLayout, ModelTables};
use msi_transport::{
    BoxedTransport, HidTransport, PrinterConfig, PrinterTransport, RecordingTransport, Transport,
    UsbId,
};
use tracing::info;

use crate::error::DriverError;
use crate::profile::ModelRegistry;

/// Parse a `vvvv:pppp` USB identifier (lowercase hex)
pub fn parse_usb_id(id: &str) -> Result<UsbId, DriverError> {
    Ok(id.parse::<UsbId>()?)
}

/// Fresh layout from a bindings file, or from the model keymap
///
/// A bindings file that is missing or empty falls back to the keymap.
pub fn initial_layout(
    tables: &ModelTables,
    bindings: Option<&Path>,
) -> Result<KeyboardLayout, DriverError> {
    if let Some(path) = bindings {
        let layout = KeyboardLayout::load_bindings(path)?;
        if !layout.is_empty() {
            return Ok(layout);
        }
    }
    Ok(tables.default_layout())
}

/// How to open the keyboard
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    /// Hex-dump every report sent to the device
    pub monitor: bool,
    /// Never open the device; print the reports instead
    pub dry_run: bool,
}

/// Open the transport for `id`, wrapped per `options`
pub fn open_transport(id: UsbId, options: OpenOptions) -> Result<BoxedTransport, DriverError> {
    if options.dry_run {
        info!("Dry run: reports for {} are printed, not sent", id);
        return Ok(Box::new(PrinterTransport::new(
            RecordingTransport::new(id),
            PrinterConfig::default(),
        )));
    }

    let hid = HidTransport::open(id)?;
    if options.monitor {
        Ok(Box::new(PrinterTransport::new(hid, PrinterConfig::default())))
    } else {
        Ok(Box::new(hid))
    }
}

/// One keyboard of a known model
pub struct Device<T: Transport = BoxedTransport> {
    model: String,
    keyboard: KeyboardInterface<T>,
}

impl Device<BoxedTransport> {
    /// Resolve the model, parse the identifier and open the keyboard
    pub fn open(
        registry: &ModelRegistry,
        model: &str,
        usb_id: &str,
        options: OpenOptions,
    ) -> Result<Self, DriverError> {
        // resolve before touching the device so a bad model never opens it
        registry.parse_model(model)?;
        let id = parse_usb_id(usb_id)?;
        let transport = open_transport(id, options)?;
        Self::with_transport(registry, model, transport)
    }
}

impl<T: Transport> Device<T> {
    /// Use an already opened transport
    pub fn with_transport(
        registry: &ModelRegistry,
        model: &str,
        transport: T,
    ) -> Result<Self, DriverError> {
        let name = registry.parse_model(model)?.to_string();
        let shared = registry.tables(&name)?;
        let tables = ModelTables::clone(&shared);
        Ok(Self {
            model: name,
            keyboard: KeyboardInterface::new(transport, tables),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tables(&self) -> &ModelTables {
        self.keyboard.tables()
    }

    pub fn keyboard(&self) -> &KeyboardInterface<T> {
        &self.keyboard
    }

    pub fn into_transport(self) -> T {
        self.keyboard.into_transport()
    }

    /// Fresh layout for this model, see [`initial_layout`]
    pub fn layout(&self, bindings: Option<&Path>) -> Result<KeyboardLayout, DriverError> {
        initial_layout(self.tables(), bindings)
    }

    /// Decode a color config file onto a layout
    pub fn load_config(&self, layout: &mut KeyboardLayout, path: &Path) -> Result<(), DriverError> {
        self.tables().codec().load_from_file(layout, path)?;
        Ok(())
    }

    /// Load a color config file and apply it
    pub fn apply_config(
        &self,
        config: &Path,
        bindings: Option<&Path>,
    ) -> Result<KeyboardLayout, DriverError> {
        let mut layout = self.layout(bindings)?;
        self.load_config(&mut layout, config)?;
        self.apply_layout(&layout)?;
        info!("Applied {} to {}", config.display(), self.model);
        Ok(layout)
    }

    /// Send a layout's colors and commit them
    pub fn apply_layout(&self, layout: &KeyboardLayout) -> Result<(), DriverError> {
        self.keyboard.set_layout(layout)?;
        self.keyboard.refresh()?;
        Ok(())
    }

    /// Every key one color
    pub fn steady(&self, color: ColorValue) -> Result<(), DriverError> {
        self.keyboard.set_color_all(color)?;
        self.keyboard.refresh()?;
        Ok(())
    }

    /// Turn every key off
    pub fn disable(&self) -> Result<(), DriverError> {
        self.steady(ColorValue::BLACK)
    }

    pub fn random(&self) -> Result<(), DriverError> {
        self.keyboard.set_random_colors()?;
        self.keyboard.refresh()?;
        Ok(())
    }

    /// Replay a named preset of this model
    pub fn preset(&self, name: &str) -> Result<(), DriverError> {
        self.keyboard.set_preset(name)?;
        self.keyboard.refresh()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usb_id() {
        assert_eq!(parse_usb_id("046d:c31c").unwrap(), UsbId::new(0x046d, 0xc31c));
        assert!(matches!(parse_usb_id("badid"), Err(DriverError::UnknownId(_))));
        assert!(matches!(parse_usb_id("046D:C31C"), Err(DriverError::UnknownId(_))));
        assert!(matches!(parse_usb_id("46d:c31c"), Err(DriverError::UnknownId(_))));
    }

    #[test]
    fn test_unknown_model_fails_before_id() {
        let registry = ModelRegistry::with_builtins();
        let result = Device::open(&registry, "GZ00", "badid", OpenOptions::default());
        assert!(matches!(result, Err(DriverError::UnknownModel { .. })));
    }

    #[test]
    fn test_bad_id_fails_before_open() {
        let registry = ModelRegistry::with_builtins();
        let result = Device::open(&registry, "GE63", "1038-1122", OpenOptions::default());
        assert!(matches!(result, Err(DriverError::UnknownId(_))));
    }

    #[test]
    fn test_dry_run_never_opens_hardware() {
        let registry = ModelRegistry::with_builtins();
        let options = OpenOptions {
            dry_run: true,
            ..Default::default()
        };
        let device = Device::open(&registry, "gs65", "1038:1122", options).unwrap();
        assert_eq!(device.model(), "GS65");
        device.disable().unwrap();
    }

    #[test]
    fn test_layout_falls_back_to_keymap() {
        let registry = ModelRegistry::with_builtins();
        let device =
            Device::with_transport(&registry, "GE63", RecordingTransport::new(msi_transport::DEFAULT_ID))
                .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let layout = device.layout(Some(dir.path().join("missing.json").as_path())).unwrap();
        assert_eq!(layout.len(), device.tables().keymap.len());
    }
}
