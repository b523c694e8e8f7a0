//! MSI per-key RGB keyboard CLI
//!
//! A command-line interface for setting the lighting of MSI laptop keyboards.

use clap::Parser;
use msi_perkeyrgb::DriverError;
use std::process::ExitCode;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers (split from main.rs)
mod commands;
use commands::Context;

fn run(cli: Cli) -> commands::CommandResult {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        // Default: apply the config file
        None | Some(Commands::Apply) => commands::lighting::apply(&ctx)?,

        // === Lighting Commands ===
        Some(Commands::Steady { color }) => commands::lighting::steady(&ctx, &color)?,
        Some(Commands::Disable) => commands::lighting::disable(&ctx)?,
        Some(Commands::Random) => commands::lighting::random(&ctx)?,
        Some(Commands::Preset { name }) => commands::lighting::preset(&ctx, &name)?,

        // === Config Commands ===
        Some(Commands::SetKey { key, color, apply }) => {
            commands::config::set_key(&ctx, &key, &color, apply)?
        }
        Some(Commands::Compact { output }) => commands::config::compact(&ctx, output.as_deref())?,
        Some(Commands::Show) => commands::config::show(&ctx)?,
        Some(Commands::Init) => commands::config::init(&ctx)?,

        // === Info Commands ===
        Some(Commands::Presets) => commands::info::presets(&ctx)?,
        Some(Commands::Models) => commands::info::models(&ctx)?,
        Some(Commands::Devices) => commands::info::devices()?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            // bad arguments exit with 2
            match e.downcast_ref::<DriverError>() {
                Some(d) if d.is_user_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
