//! Transport layer for MSI per-key RGB laptop keyboards
//!
//! The keyboard controller accepts color data as HID feature reports and a
//! commit ("refresh") command as an output report. This crate provides:
//!
//! - [`HidTransport`], the real device backend over hidapi
//! - [`PrinterTransport`], a middleware that hex-dumps every report
//! - [`RecordingTransport`], an in-memory sink for dry runs and tests

pub mod device_registry;
pub mod error;
pub mod printer;
pub mod recording;
pub mod types;

mod hid;

pub use device_registry::{is_known_id, DEFAULT_ID, PRODUCT_IDS, VENDOR_ID};
pub use error::{TransportError, UnknownIdError};
pub use hid::{list_devices, HidTransport};
pub use printer::{PrinterConfig, PrinterTransport, ReportKind};
pub use recording::{RecordedReport, RecordingTransport};
pub use types::{TransportDeviceInfo, UsbId};

/// The core transport trait - all backends implement this
///
/// Every call is a whole, blocking request: the report is either sent in
/// full or an error is returned. No retries happen at this layer.
pub trait Transport {
    /// Send a feature report (first byte is the report ID)
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Send an output report (first byte is the report ID)
    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Get device information
    fn device_info(&self) -> &TransportDeviceInfo;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError> {
        (**self).send_feature_report(data)
    }

    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError> {
        (**self).send_output_report(data)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        (**self).device_info()
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError> {
        (**self).send_feature_report(data)
    }

    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError> {
        (**self).send_output_report(data)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        (**self).device_info()
    }
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn Transport>;
