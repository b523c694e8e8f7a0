//! Driver-level errors

use msi_keyboard::{ColorParseError, KeyboardError};
use msi_transport::{TransportError, UnknownIdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    /// Model name not in the registry
    #[error("Unknown model: {model} (supported: {supported})")]
    UnknownModel { model: String, supported: String },

    /// USB identifier not in `vvvv:pppp` form
    #[error(transparent)]
    UnknownId(#[from] UnknownIdError),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error(transparent)]
    Keyboard(#[from] KeyboardError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DriverError {
    /// True for errors caused by a bad argument rather than the device
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DriverError::UnknownModel { .. }
                | DriverError::UnknownId(_)
                | DriverError::Color(_)
                | DriverError::Keyboard(KeyboardError::UnknownPreset(_))
                | DriverError::Keyboard(KeyboardError::Color(_))
        )
    }
}
