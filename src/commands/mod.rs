//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decrypt;
mod deck;
mod encrypt;
mod keystream;

pub use config::ConfigCommand;
pub use decrypt::DecryptCommand;
pub use deck::DeckCommand;
pub use encrypt::EncryptCommand;
pub use keystream::KeystreamCommand;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pontifex::{load_deck, Deck, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads user settings from `~/.pontifex/config.toml`.
fn load_settings() -> Result<Settings> {
    Settings::load().context("Failed to load settings")
}

/// Loads the starting deck, preferring an explicit path over the configured one.
fn load_starting_deck(settings: &Settings, explicit: Option<&Path>) -> Result<Deck> {
    let path = settings.resolve_deck(explicit)?;
    let deck = load_deck(&path)
        .with_context(|| format!("Failed to load deck from {}", path.display()))?;
    info!(path = %path.display(), "loaded deck");
    Ok(deck)
}
