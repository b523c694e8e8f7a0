// MSI per-key RGB keyboard driver - shared library
// Model registry, device façade and user settings

pub mod device;
pub mod error;
pub mod profile;
pub mod settings;

pub use device::{initial_layout, open_transport, parse_usb_id, Device, OpenOptions};
pub use error::DriverError;
pub use profile::{load_presets, LoadError, ModelRegistry};
pub use settings::Settings;
