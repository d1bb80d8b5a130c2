//! The four deck transformations that make up one keystream round.
//!
//! Each step rearranges the deck in place and never adds or removes a card,
//! so the permutation invariant of [`Deck`] holds across all of them.

use crate::cards::Deck;
use crate::{DECK_SIZE, JOKER_A, JOKER_B};

use super::KeystreamError;

/// Count used for cuts and output lookup. Both jokers count as 27.
fn count_value(token: u8) -> usize {
    token.min(JOKER_A) as usize
}

impl Deck {
    /// Moves `joker` down `steps` positions, one swap at a time.
    ///
    /// A joker on the bottom card swaps with the top card, so the deck is
    /// circular for this move. The joker is located again before every swap.
    pub fn advance_joker(&mut self, joker: u8, steps: usize) -> Result<(), KeystreamError> {
        for _ in 0..steps {
            let pos = self
                .position(joker)
                .ok_or(KeystreamError::MissingJoker(joker))?;
            let next = (pos + 1) % DECK_SIZE;
            self.cards.swap(pos, next);
        }
        Ok(())
    }

    /// Swaps the cards above the first joker with the cards below the second.
    ///
    /// `[head | J .. J | tail]` becomes `[tail | J .. J | head]`. Only the
    /// joker positions matter, not which joker comes first.
    pub fn triple_cut(&mut self) -> Result<(), KeystreamError> {
        let a = self
            .position(JOKER_A)
            .ok_or(KeystreamError::MissingJoker(JOKER_A))?;
        let b = self
            .position(JOKER_B)
            .ok_or(KeystreamError::MissingJoker(JOKER_B))?;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        // [head | middle | tail] -> [middle | tail | head]
        self.cards.rotate_left(lo);
        // [middle | tail] -> [tail | middle]
        self.cards[..DECK_SIZE - lo].rotate_left(hi - lo + 1);
        Ok(())
    }

    /// Moves the top `n` cards to just above the bottom card, where `n` is
    /// the bottom card's count. The bottom card stays put.
    pub fn count_cut(&mut self) {
        let n = count_value(self.bottom());
        self.cards[..DECK_SIZE - 1].rotate_left(n);
    }

    /// The card found by counting down from the top by the top card's count.
    ///
    /// May be a joker; the generator rejects those.
    pub fn output_card(&self) -> u8 {
        self.cards[count_value(self.top())]
    }

    /// Runs all four steps once and returns the output candidate.
    pub(crate) fn shuffle_round(&mut self) -> Result<u8, KeystreamError> {
        self.advance_joker(JOKER_A, 1)?;
        self.advance_joker(JOKER_B, 2)?;
        self.triple_cut()?;
        self.count_cut();
        Ok(self.output_card())
    }
}
