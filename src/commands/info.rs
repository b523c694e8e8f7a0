//! Listing command handlers.

use super::{CommandResult, Context};

/// List presets of the selected model
pub fn presets(ctx: &Context) -> CommandResult {
    let tables = ctx.tables()?;
    println!("Presets for {}:", ctx.registry.parse_model(&ctx.model)?);
    for name in tables.presets.names() {
        println!("  {name}");
    }
    Ok(())
}

/// List supported models
pub fn models(ctx: &Context) -> CommandResult {
    println!("Supported models:");
    for model in ctx.registry.models() {
        println!("  {model}");
    }
    Ok(())
}

/// List connected keyboards with a known USB ID
pub fn devices() -> CommandResult {
    let devices = msi_transport::list_devices()?;
    if devices.is_empty() {
        let known: Vec<String> = msi_transport::device_registry::known_ids()
            .map(|id| id.to_string())
            .collect();
        println!("No keyboard with a known ID ({}) found", known.join(", "));
        return Ok(());
    }
    for device in devices {
        println!(
            "  {} {} path={}",
            device.id,
            device.product_name.as_deref().unwrap_or("(unnamed)"),
            device.device_path,
        );
    }
    Ok(())
}
