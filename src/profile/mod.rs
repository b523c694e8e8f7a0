// Model profile module
// Per-model keymaps, region tables and presets for the supported laptops

pub mod builtin;
pub mod json;
pub mod registry;

pub use builtin::{COMPACT_MODELS, DEFAULT_KEYMAP, FULL_SIZE_MODELS, NUMPAD_KEYCODES};
pub use json::{load_presets, LoadError};
pub use registry::ModelRegistry;
