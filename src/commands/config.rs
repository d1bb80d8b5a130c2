//! Config command - inspect and create the settings file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use pontifex::Settings;

use super::CommandExecutor;

/// Show or create the settings file (~/.pontifex/config.toml).
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,

    /// Write a settings file with default values
    Init,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Show => show_config(),
            ConfigAction::Init => init_config(),
        }
    }
}

fn show_config() -> Result<()> {
    let path = Settings::config_path()?;
    let settings = Settings::load().context("Failed to load settings")?;

    println!("Settings file: {}", path.display());
    if !path.exists() {
        println!("  (not found, using defaults)");
    }
    println!();
    println!(
        "  deck:         {}",
        settings
            .deck
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("  filler:       {}", settings.filler);
    println!("  output:       {}", settings.output.display());
    println!("  group_output: {}", settings.group_output);

    Ok(())
}

fn init_config() -> Result<()> {
    let path = Settings::config_path()?;
    if path.exists() {
        println!("Settings file already exists: {}", path.display());
        return Ok(());
    }

    let path = Settings::default()
        .save()
        .context("Failed to write settings")?;
    println!("Settings written to {}", path.display());

    Ok(())
}
