//! Common types for transport layer

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownIdError;

/// USB vendor/product identifier pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsbId {
    /// USB Vendor ID
    pub vid: u16,
    /// USB Product ID
    pub pid: u16,
}

impl UsbId {
    pub const fn new(vid: u16, pid: u16) -> Self {
        Self { vid, pid }
    }
}

impl fmt::Display for UsbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vid, self.pid)
    }
}

impl FromStr for UsbId {
    type Err = UnknownIdError;

    /// Parse `vvvv:pppp`, exactly four lowercase hex digits on each side
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnknownIdError(s.to_string());
        let (vid, pid) = s.split_once(':').ok_or_else(err)?;

        let is_hex4 = |part: &str| {
            part.len() == 4
                && part
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        };
        if !is_hex4(vid) || !is_hex4(pid) {
            return Err(err());
        }

        Ok(Self {
            vid: u16::from_str_radix(vid, 16).map_err(|_| err())?,
            pid: u16::from_str_radix(pid, 16).map_err(|_| err())?,
        })
    }
}

impl From<(u16, u16)> for UsbId {
    fn from((vid, pid): (u16, u16)) -> Self {
        Self { vid, pid }
    }
}

/// Device identification information
#[derive(Debug, Clone)]
pub struct TransportDeviceInfo {
    pub id: UsbId,
    /// Device path (hidraw node on Linux)
    pub device_path: String,
    pub product_name: Option<String>,
    pub serial: Option<String>,
}

impl TransportDeviceInfo {
    /// Info for a transport that has no backing device
    pub fn detached(id: UsbId) -> Self {
        Self {
            id,
            device_path: String::new(),
            product_name: None,
            serial: None,
        }
    }
}
