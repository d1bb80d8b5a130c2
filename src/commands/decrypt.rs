//! Decrypt command - recover a message with the same starting deck.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pontifex::text::{group_letters, letters_to_values};
use pontifex::{decrypt, GROUP_SIZE};

use super::{load_settings, load_starting_deck, CommandExecutor};

/// Decrypt a ciphertext with the deck it was encrypted with.
///
/// Padding letters added during encryption are part of the output.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Deck file (one line of 28 card labels); defaults to the configured deck
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Ciphertext file (default: configured output, "encrypted.txt")
    #[arg(short, long, conflicts_with = "code")]
    pub input: Option<PathBuf>,

    /// Ciphertext given directly
    #[arg(short, long, conflicts_with = "input")]
    pub code: Option<String>,

    /// Write the plaintext to this file instead of only printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the plaintext in five-letter groups
    #[arg(short, long)]
    pub grouped: bool,

    /// Print the ciphertext values and the keystream
    #[arg(long)]
    pub show_keystream: bool,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_settings()?;
        let deck = load_starting_deck(&settings, self.deck.as_deref())?;

        let ciphertext = match (&self.code, &self.input) {
            (Some(code), _) => code.clone(),
            (None, input) => {
                let path = input.clone().unwrap_or_else(|| settings.output.clone());
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read ciphertext from {}", path.display()))?
            }
        };

        let decrypted = decrypt(&ciphertext, &deck).context("Failed to decrypt message")?;

        if self.show_keystream {
            println!("Deck: {}", deck);
            println!("Ciphertext values: {:?}", letters_to_values(&ciphertext));
            println!("Keystream: {:?}", decrypted.keystream);
            println!();
        }

        let text = if self.grouped {
            group_letters(&decrypted.text, GROUP_SIZE)
        } else {
            decrypted.text
        };

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, format!("{}\n", text))
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Plaintext written to {}", output_path.display());
        }

        println!("{}", text);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pontifex::{save_deck, CipherError, Deck};
    use tempfile::TempDir;

    #[test]
    fn test_ciphertext_without_letters_reports_cipher_error() {
        let temp_dir = TempDir::new().unwrap();
        let deck_path = temp_dir.path().join("secret.deck");
        save_deck(&deck_path, &Deck::ordered()).unwrap();

        let command = DecryptCommand {
            deck: Some(deck_path),
            input: None,
            code: Some("  12 ".to_string()),
            output: None,
            grouped: false,
            show_keystream: false,
        };

        let err = command.execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CipherError>(),
            Some(&CipherError::EmptyMessage)
        );
    }
}
