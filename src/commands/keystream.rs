//! Keystream command - print raw keystream values for a deck.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pontifex::{Keystream, KeystreamGenerator};

use super::{load_settings, load_starting_deck, CommandExecutor};

/// Print the first keystream values produced by a deck.
///
/// Useful for checking a hand-computed keystream against the program.
#[derive(Args, Debug)]
pub struct KeystreamCommand {
    /// Deck file (one line of 28 card labels); defaults to the configured deck
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Number of values to generate
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Also print the deck after the last value
    #[arg(long)]
    pub final_deck: bool,
}

impl CommandExecutor for KeystreamCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings()?;
        let deck = load_starting_deck(&settings, self.deck.as_deref())?;

        let mut generator = KeystreamGenerator::new(deck);
        let values = generator
            .take_values(self.count)
            .context("Failed to generate keystream")?;

        let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));

        if self.final_deck {
            println!();
            println!("Deck after {} values: {}", self.count, generator.deck());
        }

        eprintln!(
            "{} rounds ({} rejected joker outputs)",
            generator.rounds(),
            generator.rejections()
        );

        Ok(())
    }
}
