//! Card label codec.
//!
//! Maps textual card labels (`"AC"`, `"10D"`, `"JB"`) to the integer tokens
//! used by the keystream generator and back:
//! - Clubs: Ace..King → 1..13
//! - Diamonds: Ace..King → 14..26
//! - Joker A → 27, Joker B → 28

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{DECK_SIZE, JOKER_A, JOKER_B, SUIT_SIZE};

/// Errors that can occur while parsing a card label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Empty card label")]
    Empty,

    #[error("Invalid rank in card '{0}'")]
    InvalidRank(String),

    #[error("Invalid suit in card '{0}'")]
    InvalidSuit(String),

    #[error("Card value {0} is outside 1..=28")]
    OutOfRange(u8),
}

/// A single card token in `1..=28`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(pub(crate) u8);

impl Card {
    /// Joker A (token 27).
    pub const JOKER_A: Card = Card(JOKER_A);

    /// Joker B (token 28).
    pub const JOKER_B: Card = Card(JOKER_B);

    /// Creates a card from its token value.
    pub fn new(value: u8) -> Result<Self, CardError> {
        if value == 0 || value as usize > DECK_SIZE {
            return Err(CardError::OutOfRange(value));
        }
        Ok(Card(value))
    }

    /// Returns the token value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true for either joker.
    pub fn is_joker(self) -> bool {
        self.0 == JOKER_A || self.0 == JOKER_B
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&card_label(*self))
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

/// Parses a card label into its token.
///
/// Labels are case-insensitive and trimmed. `JA` and `JB` are the jokers;
/// everything else is a rank (`A`, `2`..`10`, `J`, `Q`, `K`) followed by a
/// one-character suit (`C` or `D`).
pub fn parse_card(raw: &str) -> Result<Card, CardError> {
    let label = raw.trim().to_ascii_uppercase();

    match label.as_str() {
        "" => return Err(CardError::Empty),
        "JA" => return Ok(Card::JOKER_A),
        "JB" => return Ok(Card::JOKER_B),
        _ => {}
    }

    let mut chars = label.chars();
    let suit = chars.next_back().ok_or(CardError::Empty)?;
    let rank = chars.as_str();

    let base: u8 = match rank {
        "A" => 1,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        numeral => match numeral.parse::<u8>() {
            Ok(n) if (1..=SUIT_SIZE).contains(&n) => n,
            _ => return Err(CardError::InvalidRank(raw.trim().to_string())),
        },
    };

    match suit {
        'C' => Ok(Card(base)),
        'D' => Ok(Card(base + SUIT_SIZE)),
        _ => Err(CardError::InvalidSuit(raw.trim().to_string())),
    }
}

/// Returns the canonical label for a card (`AC`, `10D`, `JA`, ...).
pub fn card_label(card: Card) -> String {
    match card.value() {
        JOKER_A => "JA".to_string(),
        JOKER_B => "JB".to_string(),
        value => {
            let (rank, suit) = if value > SUIT_SIZE {
                (value - SUIT_SIZE, 'D')
            } else {
                (value, 'C')
            };
            let rank = match rank {
                1 => "A".to_string(),
                11 => "J".to_string(),
                12 => "Q".to_string(),
                13 => "K".to_string(),
                n => n.to_string(),
            };
            format!("{}{}", rank, suit)
        }
    }
}
