//! # Pontifex - Solitaire stream cipher
//!
//! Pontifex implements the Solitaire (Pontifex) hand cipher on a 28-card deck:
//! Clubs and Diamonds plus two jokers. The order of the deck is the shared
//! secret. Each letter of the message is shifted by one keystream value,
//! produced by repeatedly rearranging the deck.
//!
//! ## Overview
//!
//! - Cards are tokens 1–28: Clubs A–K = 1–13, Diamonds A–K = 14–26,
//!   Joker A = 27, Joker B = 28
//! - One keystream round: move Joker A down one card, Joker B down two,
//!   triple cut around the jokers, count cut by the bottom card
//! - The output card is found by counting down by the top card; a joker
//!   output discards the whole round and runs another
//! - Letters are combined with `((p + k - 1) mod 26) + 1`
//!
//! This is a hand cipher: it has no integrity protection and no nonces.
//! Never reuse a deck for two messages.
//!
//! ## Example Usage
//!
//! ```rust
//! use pontifex::{decrypt, encrypt, Deck};
//!
//! let deck = Deck::ordered();
//!
//! let encrypted = encrypt("Hello, world!", &deck).unwrap();
//! assert_eq!(encrypted.text, "PUWTUVTSFK");
//!
//! let decrypted = decrypt(&encrypted.text, &deck).unwrap();
//! assert_eq!(decrypted.text, "HELLOWORLD");
//! ```
//!
//! Drawing the keystream directly:
//!
//! ```rust
//! use pontifex::{Deck, Keystream, KeystreamGenerator};
//!
//! let mut generator = KeystreamGenerator::new(Deck::ordered());
//! assert_eq!(generator.take_values(3).unwrap(), vec![8, 16, 11]);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Card labels, the validated deck, deck files
//! - [`keystream`]: Round steps and the keystream generator
//! - [`text`]: Message cleanup and letter/value conversion
//! - [`cipher`]: Encryption and decryption
//! - [`config`]: User settings

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 28;

/// Cards per suit.
pub const SUIT_SIZE: u8 = 13;

/// Token of Joker A.
pub const JOKER_A: u8 = 27;

/// Token of Joker B.
pub const JOKER_B: u8 = 28;

/// Messages are padded to a multiple of this many letters.
pub const GROUP_SIZE: usize = 5;

/// Default padding letter.
pub const FILLER: char = 'X';

pub mod cards;
pub mod cipher;
pub mod config;
pub mod keystream;
pub mod text;

// Re-export commonly used types at the crate root
pub use cards::{card_label, load_deck, parse_card, save_deck, Card, CardError, Deck, DeckError};
pub use cipher::{
    decrypt, decrypt_values, decrypt_with_keystream, encrypt, encrypt_values,
    encrypt_with_config, encrypt_with_keystream, CipherConfig, CipherError, CipherOutput,
};
pub use config::{ConfigError, Settings};
pub use keystream::{Keystream, KeystreamError, KeystreamGenerator};
pub use text::TextError;
