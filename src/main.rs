//! Pontifex - Solitaire stream cipher
//!
//! A CLI for the 28-card Solitaire hand cipher. Both parties hold the same
//! deck file; only the ciphertext is transmitted.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use commands::{
    CommandExecutor, ConfigCommand, DecryptCommand, DeckCommand, EncryptCommand,
    KeystreamCommand,
};

/// Pontifex - Solitaire stream cipher
///
/// Encrypts letters with a keystream drawn from a shuffled 28-card deck
/// (Clubs, Diamonds, and two jokers). The deck order is the shared secret.
#[derive(Parser)]
#[command(name = "pontifex")]
#[command(version)]
#[command(about = "Solitaire (Pontifex) deck-of-cards stream cipher")]
#[command(long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with a deck
    Encrypt(EncryptCommand),

    /// Decrypt a message with the same starting deck
    Decrypt(DecryptCommand),

    /// Print raw keystream values for a deck
    Keystream(KeystreamCommand),

    /// Create or inspect deck files
    Deck(DeckCommand),

    /// Show or create the settings file
    Config(ConfigCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encrypt(cmd) => cmd,
            Commands::Decrypt(cmd) => cmd,
            Commands::Keystream(cmd) => cmd,
            Commands::Deck(cmd) => cmd,
            Commands::Config(cmd) => cmd,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    cli.command.executor().execute()
}
