//! Color config file command handlers.

use super::{ensure_parent, parse_key, CommandResult, Context};
use anyhow::{bail, Context as _};
use msi_keyboard::{ColorValue, KeyboardLayout, ModelTables};
use msi_perkeyrgb::DriverError;
use std::path::Path;

fn save(tables: &ModelTables, layout: &KeyboardLayout, path: &Path) -> CommandResult {
    ensure_parent(path)?;
    tables
        .codec()
        .save_to_file(layout, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Set one key's color in the config file
pub fn set_key(ctx: &Context, key: &str, color: &str, apply: bool) -> CommandResult {
    let keycode = parse_key(key)?;
    let color = ColorValue::parse(color).map_err(DriverError::from)?;
    let tables = ctx.tables()?;

    let mut layout = ctx.load_layout(&tables)?;
    if !layout.set_color(keycode, color) {
        bail!("Key {key} ({keycode}) is not on the {} keyboard", ctx.model);
    }
    save(&tables, &layout, &ctx.config)?;
    println!(
        "Key {keycode} set to {} in {}",
        color.display_name(),
        ctx.config.display()
    );

    if apply {
        ctx.open()?.apply_layout(&layout)?;
        println!("Applied");
    }
    Ok(())
}

/// Write the effective settings to the settings file
pub fn init(ctx: &Context) -> CommandResult {
    let path = &ctx.settings_path;
    ctx.settings()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Settings written to {}", path.display());
    Ok(())
}

/// Rewrite the config file in its shortest form
pub fn compact(ctx: &Context, output: Option<&Path>) -> CommandResult {
    let tables = ctx.tables()?;
    let layout = ctx.load_layout(&tables)?;
    let target = output.unwrap_or(ctx.config.as_path());
    save(&tables, &layout, target)?;
    for line in tables.codec().save(&layout) {
        println!("{line}");
    }
    Ok(())
}

/// Print the decoded keycode → color map
pub fn show(ctx: &Context) -> CommandResult {
    let tables = ctx.tables()?;
    let layout = ctx.load_layout(&tables)?;
    println!("{} ({} keys):", ctx.config.display(), layout.len());
    for key in layout.iter() {
        println!(
            "  {:>3}  {:<12} {}",
            key.keycode,
            key.name,
            key.color.display_name()
        );
    }
    Ok(())
}
