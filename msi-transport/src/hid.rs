//! hidapi-backed transport for the keyboard's USB HID interface

use hidapi::{HidApi, HidDevice};
use tracing::{debug, info};

use crate::device_registry;
use crate::error::TransportError;
use crate::types::{TransportDeviceInfo, UsbId};
use crate::Transport;

/// HID transport for the laptop's internal keyboard controller
///
/// Colors travel as feature reports, the refresh command as an output report.
pub struct HidTransport {
    device: HidDevice,
    info: TransportDeviceInfo,
}

impl HidTransport {
    /// Open the first HID interface matching `id`
    pub fn open(id: UsbId) -> Result<Self, TransportError> {
        let api = HidApi::new().map_err(|e| TransportError::LibraryUnavailable(e.to_string()))?;
        Self::open_with(&api, id)
    }

    /// Open using an existing `HidApi` context
    pub fn open_with(api: &HidApi, id: UsbId) -> Result<Self, TransportError> {
        let device_info = api
            .device_list()
            .find(|d| d.vendor_id() == id.vid && d.product_id() == id.pid)
            .ok_or_else(|| TransportError::DeviceNotFound(id.to_string()))?;

        let info = TransportDeviceInfo {
            id,
            device_path: device_info.path().to_string_lossy().into_owned(),
            product_name: device_info.product_string().map(str::to_string),
            serial: device_info.serial_number().map(str::to_string),
        };

        let device = device_info
            .open_device(api)
            .map_err(|e| TransportError::from_open_error(&id.to_string(), e))?;

        info!("Opened keyboard {} at {}", id, info.device_path);
        Ok(Self { device, info })
    }
}

/// List connected HID interfaces that carry a known keyboard ID
pub fn list_devices() -> Result<Vec<TransportDeviceInfo>, TransportError> {
    let api = HidApi::new().map_err(|e| TransportError::LibraryUnavailable(e.to_string()))?;
    let devices = api
        .device_list()
        .filter(|d| device_registry::is_known_id(UsbId::new(d.vendor_id(), d.product_id())))
        .map(|d| TransportDeviceInfo {
            id: UsbId::new(d.vendor_id(), d.product_id()),
            device_path: d.path().to_string_lossy().into_owned(),
            product_name: d.product_string().map(str::to_string),
            serial: d.serial_number().map(str::to_string),
        })
        .collect();
    Ok(devices)
}

impl Transport for HidTransport {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError> {
        debug!("Feature report ({} bytes): {:02x?}", data.len(), data);
        self.device.send_feature_report(data)?;
        Ok(())
    }

    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError> {
        debug!("Output report ({} bytes): {:02x?}", data.len(), data);
        let written = self.device.write(data)?;
        if written != data.len() {
            return Err(TransportError::ShortWrite {
                expected: data.len(),
                written,
            });
        }
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}
