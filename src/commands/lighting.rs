//! Lighting command handlers.

use super::{CommandResult, Context};
use anyhow::Context as _;
use msi_keyboard::ColorValue;
use msi_perkeyrgb::DriverError;

/// Apply the color config file
pub fn apply(ctx: &Context) -> CommandResult {
    let device = ctx.open()?;
    let layout = device
        .apply_config(&ctx.config, ctx.bindings.as_deref())
        .with_context(|| format!("Failed to apply {}", ctx.config.display()))?;
    println!(
        "Applied {} ({} keys) to {}",
        ctx.config.display(),
        layout.len(),
        device.model()
    );
    Ok(())
}

/// Set every key to one color
pub fn steady(ctx: &Context, color: &str) -> CommandResult {
    let color = ColorValue::parse(color).map_err(DriverError::from)?;
    ctx.open()?.steady(color)?;
    println!("All keys set to {}", color.display_name());
    Ok(())
}

/// Turn every key off
pub fn disable(ctx: &Context) -> CommandResult {
    ctx.open()?.disable()?;
    println!("Keyboard lighting disabled");
    Ok(())
}

/// Random color per key
pub fn random(ctx: &Context) -> CommandResult {
    ctx.open()?.random()?;
    println!("Random colors set");
    Ok(())
}

/// Replay a built-in preset
pub fn preset(ctx: &Context, name: &str) -> CommandResult {
    // check the name before opening the device
    ctx.tables()?
        .presets
        .parse_preset(name)
        .map_err(DriverError::from)?;
    ctx.open()?.preset(name)?;
    println!("Preset {name} applied");
    Ok(())
}
