//! Keystream generation.
//!
//! A [`KeystreamGenerator`] owns one deck for one encryption or decryption
//! session. Every call to [`Keystream::next_value`] runs the four-step round
//! (advance Joker A, advance Joker B twice, triple cut, count cut) until the
//! output card is not a joker, and yields a shift value in `1..=26`.

pub mod generator;
pub mod round;

pub use generator::KeystreamGenerator;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during keystream generation.
///
/// These indicate a corrupted deck and are never recoverable by retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeystreamError {
    #[error("Joker {0} not found in deck")]
    MissingJoker(u8),
}

/// A source of shift values in `1..=26`.
pub trait Keystream {
    /// Returns the next shift value.
    fn next_value(&mut self) -> Result<u8, KeystreamError>;

    /// Returns the next `count` shift values, in order.
    fn take_values(&mut self, count: usize) -> Result<Vec<u8>, KeystreamError> {
        let values = (0..count)
            .map(|_| self.next_value())
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count, "generated keystream values");
        Ok(values)
    }
}
