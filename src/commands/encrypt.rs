//! Encrypt command - encrypt a message with a deck.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pontifex::encrypt_with_config;
use pontifex::text::{clean_message, letters_to_values, validate_filler};

use super::{load_settings, load_starting_deck, CommandExecutor};

/// Encrypt a message with a deck.
///
/// The message is reduced to letters A-Z, padded to a multiple of five, and
/// shifted by the deck's keystream. The ciphertext is written to the output
/// file and printed.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Deck file (one line of 28 card labels); defaults to the configured deck
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Message to encrypt (mutually exclusive with --file; reads stdin if neither is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Text file to encrypt (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output file for the ciphertext (default: configured output, "encrypted.txt")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the ciphertext in five-letter groups
    #[arg(short, long)]
    pub grouped: bool,

    /// Padding letter (default: configured filler, "X")
    #[arg(long)]
    pub filler: Option<char>,

    /// Print the cleaned letters, their values, and the keystream
    #[arg(long)]
    pub show_keystream: bool,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings()?;
        let deck = load_starting_deck(&settings, self.deck.as_deref())?;

        let message = self.read_message()?;

        let mut config = settings.cipher_config();
        if let Some(filler) = self.filler {
            config.filler = validate_filler(filler).context("Invalid --filler")?;
        }
        config.grouped |= self.grouped;

        let encrypted =
            encrypt_with_config(&message, &deck, &config).context("Failed to encrypt message")?;

        if self.show_keystream {
            let cleaned = clean_message(&message, config.filler);
            println!("Deck: {}", deck);
            println!("Message: {}", cleaned);
            println!("Letter values: {:?}", letters_to_values(&cleaned));
            println!("Keystream: {:?}", encrypted.keystream);
            println!();
        }

        let output_path = self.output.clone().unwrap_or(settings.output);
        std::fs::write(&output_path, format!("{}\n", encrypted.text))
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;

        println!("{}", encrypted.text);
        eprintln!("Ciphertext written to {}", output_path.display());

        Ok(())
    }
}

impl EncryptCommand {
    fn read_message(&self) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message from {}", path.display()));
        }

        eprintln!("Reading message from stdin (Ctrl+D to finish):");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read message from stdin")?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pontifex::{save_deck, CipherError, Deck};
    use tempfile::TempDir;

    #[test]
    fn test_message_without_letters_reports_cipher_error() {
        let temp_dir = TempDir::new().unwrap();
        let deck_path = temp_dir.path().join("secret.deck");
        save_deck(&deck_path, &Deck::ordered()).unwrap();
        let output = temp_dir.path().join("out.txt");

        let command = EncryptCommand {
            deck: Some(deck_path),
            message: Some("12 34 !!".to_string()),
            file: None,
            output: Some(output.clone()),
            grouped: false,
            filler: None,
            show_keystream: false,
        };

        let err = command.execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CipherError>(),
            Some(&CipherError::EmptyMessage)
        );
        assert!(!output.exists());
    }
}
