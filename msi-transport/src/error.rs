//! Transport error types

use thiserror::Error;

/// Errors that can occur while opening or writing to the keyboard
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(
        "Cannot open HIDAPI library: {0}. Make sure you have installed libhidapi on your system, \
         then try running \"sudo ldconfig\" to regenerate library cache"
    )]
    LibraryUnavailable(String),

    #[error("No USB device with ID {0} found. Check the ID with `lsusb` and pass it with --id")]
    DeviceNotFound(String),

    #[error(
        "Cannot open keyboard {0}: permission denied. Run this program as root, or give yourself \
         read/write permissions to the corresponding /dev/hidraw*. If you have just installed the \
         udev rule, reboot for it to take effect"
    )]
    PermissionDenied(String),

    #[error(
        "Cannot open keyboard {0}. The USB device may not be a HID device, or you lack \
         read/write permissions to the corresponding /dev/hidraw*. Run this program as root or \
         install the udev rule, then reboot for it to take effect"
    )]
    OpenFailed(String),

    #[error("HID error: {0}")]
    Hid(String),

    #[error("Short write: sent {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },
}

impl From<hidapi::HidError> for TransportError {
    fn from(e: hidapi::HidError) -> Self {
        TransportError::Hid(e.to_string())
    }
}

impl TransportError {
    /// Classify an error returned while opening a device path
    pub(crate) fn from_open_error(id: &str, e: hidapi::HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") || msg.contains("EACCES") {
            TransportError::PermissionDenied(id.to_string())
        } else {
            TransportError::OpenFailed(id.to_string())
        }
    }
}

/// Malformed `vvvv:pppp` USB identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown vendor/product ID: {0}")]
pub struct UnknownIdError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn open_error(message: &str) -> hidapi::HidError {
        hidapi::HidError::HidApiError {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_open_error_classification() {
        let denied = TransportError::from_open_error("1038:1122", open_error("Permission denied"));
        assert!(matches!(denied, TransportError::PermissionDenied(_)));

        let other = TransportError::from_open_error("1038:1122", open_error("Failed to open"));
        assert!(matches!(other, TransportError::OpenFailed(_)));
    }

    #[test]
    fn test_open_failed_mentions_permissions() {
        let msg = TransportError::OpenFailed("1038:1122".to_string()).to_string();
        assert!(msg.contains("1038:1122"));
        assert!(msg.contains("/dev/hidraw"));
        assert!(msg.contains("udev rule"));
    }
}
