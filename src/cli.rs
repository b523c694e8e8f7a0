// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "msi-perkeyrgb")]
#[command(author, version, about = "Per-key RGB lighting for MSI laptop keyboards")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Laptop model (see `models`)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// USB vendor:product ID of the keyboard, lowercase hex (e.g. 1038:1122)
    #[arg(long, global = true, value_name = "VID:PID")]
    pub id: Option<String>,

    /// Color config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Key-bindings JSON file (defaults to the model keymap)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub bindings: Option<PathBuf>,

    /// Settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print every report sent to the keyboard
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Encode and print reports without opening the keyboard
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // === Lighting Commands ===
    /// Apply the color config file (default command)
    #[command(visible_alias = "a")]
    Apply,

    /// Set every key to one color
    #[command(visible_alias = "s")]
    Steady {
        /// Color name or 6 hex digits (e.g. red, ff8800)
        color: String,
    },

    /// Turn the keyboard lighting off
    #[command(visible_alias = "off")]
    Disable,

    /// Random color per key
    Random,

    /// Replay a built-in preset
    #[command(visible_alias = "p")]
    Preset {
        /// Preset name (see `presets`)
        name: String,
    },

    // === Config Commands ===
    /// Set one key in the color config file
    #[command(visible_alias = "sk")]
    SetKey {
        /// Platform keycode or key name (e.g. 38, Esc, KPEnter)
        key: String,
        /// Color name or 6 hex digits
        color: String,
        /// Send the updated config to the keyboard
        #[arg(long)]
        apply: bool,
    },

    /// Rewrite the color config file in its shortest form
    Compact {
        /// Write here instead of overwriting the config file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the keycode → color map of the config file
    Show,

    /// Write the current settings, with command-line overrides, to the settings file
    Init,

    // === Info Commands ===
    /// List presets of the selected model
    Presets,

    /// List supported models
    Models,

    /// List connected keyboards with a known USB ID
    #[command(visible_alias = "list")]
    Devices,
}
