//! Per-key color engine for MSI RGB laptop keyboards
//!
//! This crate holds the lighting data model and everything needed to turn
//! it into reports on top of any [`Transport`]:
//!
//! - [`KeyboardLayout`], the per-session keycode → color state
//! - [`ConfigCodec`], the compact text config format
//! - [`MsiKeymap`], [`RegionTable`] and [`protocol`], which translate and
//!   frame colors for the firmware
//! - [`KeyboardInterface`], which sends the framed reports

pub mod bulk;
pub mod color;
pub mod config;
pub mod error;
pub mod keycodes;
pub mod keymap;
pub mod layout;
pub mod preset;
pub mod protocol;
pub mod region;

use std::collections::BTreeMap;

pub use bulk::{BulkGroup, BulkGroups};
pub use color::{ColorParseError, ColorValue};
pub use config::{ConfigCodec, ConfigLine, KeyTarget};
pub use error::KeyboardError;
pub use keymap::MsiKeymap;
pub use layout::{KeyBinding, KeyBox, KeyboardLayout, LogicalKey};
pub use preset::Presets;
pub use region::{Region, RegionTable};

use msi_transport::Transport;
use tracing::{debug, info};

/// Platform or hardware keycode, depending on context
pub type Keycode = u16;

/// Keycode → color
pub type ColorMap = BTreeMap<Keycode, ColorValue>;

/// Static data for one model family, immutable once loaded
#[derive(Debug, Clone)]
pub struct ModelTables {
    pub keymap: MsiKeymap,
    pub regions: RegionTable,
    pub bulk: BulkGroups,
    pub presets: Presets,
}

impl ModelTables {
    /// Codec bound to this model's bulk groups
    pub fn codec(&self) -> ConfigCodec<'_> {
        ConfigCodec::new(&self.bulk)
    }

    /// Black layout covering every key of the keymap
    pub fn default_layout(&self) -> KeyboardLayout {
        KeyboardLayout::from_keymap(&self.keymap)
    }
}

/// High-level keyboard interface using any transport
pub struct KeyboardInterface<T: Transport> {
    transport: T,
    tables: ModelTables,
}

impl<T: Transport> KeyboardInterface<T> {
    pub fn new(transport: T, tables: ModelTables) -> Self {
        Self { transport, tables }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn tables(&self) -> &ModelTables {
        &self.tables
    }

    fn send_key_colors(&self, region: &Region, packet: &[u8]) -> Result<(), KeyboardError> {
        debug!("{} colors: {}", region.name, hex::encode(packet));
        self.transport.send_feature_report(packet)?;
        Ok(())
    }

    // === Lighting ===

    /// Send per-key colors keyed by platform keycode
    ///
    /// Only regions that receive at least one key are sent. Call
    /// [`refresh`](Self::refresh) afterwards to make them visible.
    pub fn set_colors(&self, colors: &ColorMap) -> Result<(), KeyboardError> {
        let hardware = self.tables.keymap.translate(colors)?;
        let parts = protocol::partition_by_region(&hardware, &self.tables.regions);
        for region in &self.tables.regions {
            if let Some(part) = parts.get(region.name) {
                let packet = protocol::build_region_packet(region, part);
                self.send_key_colors(region, &packet)?;
            }
        }
        info!("Sent colors for {} keys", colors.len());
        Ok(())
    }

    /// Send a layout's current colors
    pub fn set_layout(&self, layout: &KeyboardLayout) -> Result<(), KeyboardError> {
        self.set_colors(&layout.color_map())
    }

    /// Set every slot of every region to one color
    pub fn set_color_all(&self, color: ColorValue) -> Result<(), KeyboardError> {
        for region in &self.tables.regions {
            let packet = protocol::build_fill_packet(region, color);
            self.send_key_colors(region, &packet)?;
        }
        info!("Set all keys to {}", color);
        Ok(())
    }

    /// Give every slot an independent random color
    pub fn set_random_colors(&self) -> Result<(), KeyboardError> {
        self.set_random_colors_with(&mut fastrand::Rng::new())
    }

    pub fn set_random_colors_with(&self, rng: &mut fastrand::Rng) -> Result<(), KeyboardError> {
        for region in &self.tables.regions {
            let packet = protocol::build_random_packet(region, rng);
            self.send_key_colors(region, &packet)?;
        }
        info!("Set random colors");
        Ok(())
    }

    /// Replay a built-in preset
    pub fn set_preset(&self, name: &str) -> Result<(), KeyboardError> {
        let reports = self.tables.presets.apply_preset(name)?;
        for report in &reports {
            debug!("preset {}: {}", name, hex::encode(report));
            self.transport.send_feature_report(report)?;
        }
        info!("Applied preset {} ({} reports)", name, reports.len());
        Ok(())
    }

    /// Commit previously sent colors
    pub fn refresh(&self) -> Result<(), KeyboardError> {
        self.transport
            .send_output_report(&protocol::build_refresh_packet())?;
        debug!("Refresh sent");
        Ok(())
    }
}
