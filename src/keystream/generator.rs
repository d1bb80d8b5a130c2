//! Deck-driven keystream generator.

use tracing::trace;

use crate::cards::{Deck, DeckError};
use crate::{JOKER_A, JOKER_B};

use super::{Keystream, KeystreamError};

/// One keystream session over an exclusively owned deck.
///
/// Sessions are not shareable: each round depends on the deck left by the
/// previous one. Encryption and decryption each start their own session from
/// the same starting deck.
#[derive(Debug, Clone)]
pub struct KeystreamGenerator {
    deck: Deck,
    rounds: u64,
    rejections: u64,
}

impl KeystreamGenerator {
    /// Starts a session from a validated deck.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            rounds: 0,
            rejections: 0,
        }
    }

    /// Starts a session from raw token values, top card first.
    pub fn from_tokens(tokens: &[u8]) -> Result<Self, DeckError> {
        Ok(Self::new(Deck::from_tokens(tokens)?))
    }

    /// The current deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Ends the session, returning the final deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Rounds run so far, including rejected ones.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Rounds whose output card was a joker.
    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    /// Runs one full round and returns the raw output card, joker or not.
    pub fn round(&mut self) -> Result<u8, KeystreamError> {
        let candidate = self.deck.shuffle_round()?;
        self.rounds += 1;
        Ok(candidate)
    }
}

impl Keystream for KeystreamGenerator {
    /// Repeats whole rounds until the output card is not a joker.
    fn next_value(&mut self) -> Result<u8, KeystreamError> {
        loop {
            let candidate = self.round()?;
            if candidate != JOKER_A && candidate != JOKER_B {
                return Ok(candidate);
            }
            self.rejections += 1;
            trace!(candidate, rounds = self.rounds, "joker output, repeating round");
        }
    }
}
