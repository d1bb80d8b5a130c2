//! The 28-card deck that drives the keystream.
//!
//! A [`Deck`] is always a permutation of `1..=28`. Construction validates this
//! once; every later mutation (see [`crate::keystream`]) is a rearrangement
//! and cannot break it.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::codec::{parse_card, Card, CardError};
use crate::DECK_SIZE;

/// Errors that can occur when building or loading a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Deck must contain exactly 28 cards, found {found}")]
    WrongSize { found: usize },

    #[error("Card value {0} is outside 1..=28")]
    OutOfRange(u8),

    #[error("Card value {0} appears more than once")]
    Duplicate(u8),

    #[error("Invalid card: {0}")]
    Card(#[from] CardError),

    #[error("Deck file is empty")]
    EmptyFile,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered permutation of the 28 card tokens. Index 0 is the top card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub(crate) cards: [u8; DECK_SIZE],
}

impl Deck {
    /// Builds a deck from raw token values, top card first.
    ///
    /// Fails unless `tokens` is exactly a permutation of `1..=28`.
    pub fn from_tokens(tokens: &[u8]) -> Result<Self, DeckError> {
        if tokens.len() != DECK_SIZE {
            return Err(DeckError::WrongSize {
                found: tokens.len(),
            });
        }

        let mut seen = [false; DECK_SIZE];
        let mut cards = [0u8; DECK_SIZE];
        for (slot, &value) in cards.iter_mut().zip(tokens) {
            if value == 0 || value as usize > DECK_SIZE {
                return Err(DeckError::OutOfRange(value));
            }
            let idx = (value - 1) as usize;
            if seen[idx] {
                return Err(DeckError::Duplicate(value));
            }
            seen[idx] = true;
            *slot = value;
        }

        Ok(Deck { cards })
    }

    /// Builds a deck from parsed cards, top card first.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        let tokens: Vec<u8> = cards.iter().map(|c| c.value()).collect();
        Self::from_tokens(&tokens)
    }

    /// Parses a whitespace-separated line of card labels.
    pub fn parse(line: &str) -> Result<Self, DeckError> {
        let cards = line
            .split_whitespace()
            .map(parse_card)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }

    /// Clubs A–K, Diamonds A–K, Joker A, Joker B.
    pub fn ordered() -> Self {
        let mut cards = [0u8; DECK_SIZE];
        for (i, slot) in cards.iter_mut().enumerate() {
            *slot = (i + 1) as u8;
        }
        Deck { cards }
    }

    /// A freshly shuffled deck, suitable as a new shared secret when `rng` is
    /// a cryptographic generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Token values, top card first.
    pub fn tokens(&self) -> &[u8] {
        &self.cards
    }

    /// Cards, top card first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|&v| Card(v))
    }

    /// The top card's token.
    pub fn top(&self) -> u8 {
        self.cards[0]
    }

    /// The bottom card's token.
    pub fn bottom(&self) -> u8 {
        self.cards[DECK_SIZE - 1]
    }

    /// Index of the card with the given token, if present.
    pub fn position(&self, value: u8) -> Option<usize> {
        self.cards.iter().position(|&v| v == value)
    }

    /// Checks the permutation invariant.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        for &value in &self.cards {
            if value == 0 || value as usize > DECK_SIZE {
                return false;
            }
            let idx = (value - 1) as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    /// Card labels, top card first.
    pub fn labels(&self) -> Vec<String> {
        self.cards().map(|c| c.to_string()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" "))
    }
}

/// Loads a deck from a text file.
///
/// The file holds the 28 labels separated by any whitespace, line breaks
/// included.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(DeckError::EmptyFile);
    }
    Deck::parse(&content)
}

/// Writes a deck to a text file as a single line of labels.
///
/// On Unix the file is created readable by its owner only.
pub fn save_deck(path: &Path, deck: &Deck) -> Result<(), DeckError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);

        // mode() only applies to newly created files
        if path.exists() {
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
    }

    let mut file = options.open(path)?;
    writeln!(file, "{}", deck)?;
    Ok(())
}
