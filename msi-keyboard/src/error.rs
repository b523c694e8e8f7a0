//! Keyboard interface error types

use msi_transport::TransportError;
use thiserror::Error;

use crate::color::ColorParseError;
use crate::Keycode;

/// Errors from keyboard operations
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// Transport layer error
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Preset name not present for this model
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Stored preset payload is not valid hex
    #[error("Preset {name} has an invalid payload: {reason}")]
    InvalidPreset { name: String, reason: String },

    /// Color config line that cannot be interpreted
    #[error("Malformed config line {line}: {content:?} ({reason})")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// Platform keycode missing from the model's keymap
    #[error("Keycode {0} has no hardware mapping for this model")]
    UnmappedKeycode(Keycode),

    #[error("Key bindings error: {0}")]
    Bindings(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
