//! Deck command - create and inspect deck files.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use rand::rngs::OsRng;

use pontifex::{load_deck, save_deck, Deck};

use super::CommandExecutor;

/// Create or inspect deck files.
///
/// A deck file holds one line of 28 card labels (AC..KC, AD..KD, JA, JB)
/// separated by whitespace. The order is the shared secret.
#[derive(Args, Debug)]
pub struct DeckCommand {
    #[command(subcommand)]
    pub action: DeckAction,
}

#[derive(Subcommand, Debug)]
pub enum DeckAction {
    /// Write a freshly shuffled deck
    New(DeckNewArgs),

    /// Validate a deck file and list its cards
    Show(DeckShowArgs),
}

#[derive(Args, Debug)]
pub struct DeckNewArgs {
    /// Output path for the deck file
    #[arg(short, long, default_value = "pontifex.deck")]
    pub output: PathBuf,

    /// Write the ordered deck (AC..KD, JA, JB) instead of a shuffled one
    #[arg(long)]
    pub ordered: bool,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct DeckShowArgs {
    /// Path to the deck file
    pub path: PathBuf,
}

impl CommandExecutor for DeckCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            DeckAction::New(args) => new_deck(args),
            DeckAction::Show(args) => show_deck(args),
        }
    }
}

/// Write a new deck file.
fn new_deck(args: &DeckNewArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let deck = if args.ordered {
        Deck::ordered()
    } else {
        Deck::shuffled(&mut OsRng)
    };

    save_deck(&args.output, &deck)
        .with_context(|| format!("Failed to write deck to {}", args.output.display()))?;

    println!("Deck written to {}", args.output.display());
    println!();
    println!("IMPORTANT: Share this deck only over a secure channel.");
    println!("           Use each deck for one message only.");

    Ok(())
}

/// Validate and list a deck file.
fn show_deck(args: &DeckShowArgs) -> Result<()> {
    let deck = load_deck(&args.path)
        .with_context(|| format!("Failed to load deck from {}", args.path.display()))?;

    println!("Deck: {}", args.path.display());
    println!();
    for (position, card) in deck.cards().enumerate() {
        println!("  {:>2}. {:<3} ({})", position + 1, card.to_string(), card.value());
    }

    Ok(())
}
