//! Cards and decks.
//!
//! This module provides:
//! - Card label parsing and formatting (`AC`, `10D`, `JA`, ...)
//! - The validated 28-card [`Deck`]
//! - Loading and saving deck files

pub mod codec;
pub mod deck;

pub use codec::{card_label, parse_card, Card, CardError};
pub use deck::{load_deck, save_deck, Deck, DeckError};
