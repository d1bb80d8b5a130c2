//! Message encryption and decryption.
//!
//! Encryption:
//! 1. Clean the message (letters only, upper case, padded to five-letter groups)
//! 2. Draw one keystream value per letter from a fresh session
//! 3. Add each value to its letter, wrapping past Z
//!
//! Decryption draws the same keystream from the same starting deck and
//! subtracts it.

use thiserror::Error;
use tracing::debug;

use crate::cards::Deck;
use crate::keystream::{Keystream, KeystreamError, KeystreamGenerator};
use crate::text::{
    clean_message, group_letters, letters_to_values, validate_filler, values_to_letters, TextError,
};
use crate::{FILLER, GROUP_SIZE};

/// Number of letters in the alphabet; keystream values share this range.
const ALPHABET: u8 = 26;

/// Errors that can occur during encryption or decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Message length {message} does not match keystream length {keystream}")]
    LengthMismatch { message: usize, keystream: usize },

    #[error("Message contains no letters")]
    EmptyMessage,

    #[error("Keystream error: {0}")]
    Keystream(#[from] KeystreamError),

    #[error("Text error: {0}")]
    Text(#[from] TextError),
}

/// Configuration for encryption.
#[derive(Debug, Clone)]
pub struct CipherConfig {
    /// Letter used to pad the message to a whole group.
    pub filler: char,
    /// Split output into space-separated five-letter groups.
    pub grouped: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            filler: FILLER,
            grouped: false,
        }
    }
}

/// Result of encrypting or decrypting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOutput {
    /// The resulting letters.
    pub text: String,
    /// The keystream values consumed, one per letter.
    pub keystream: Vec<u8>,
}

/// Adds keystream values to letter values: `((p + k - 1) mod 26) + 1`.
///
/// Both sides must hold values in `1..=26`.
pub fn encrypt_values(plain: &[u8], keystream: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_inputs(plain, keystream)?;
    Ok(plain
        .iter()
        .zip(keystream)
        .map(|(&p, &k)| (p + k - 1) % ALPHABET + 1)
        .collect())
}

/// Subtracts keystream values from letter values, adding 26 when the
/// difference is not positive.
///
/// Both sides must hold values in `1..=26`.
pub fn decrypt_values(cipher: &[u8], keystream: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_inputs(cipher, keystream)?;
    Ok(cipher
        .iter()
        .zip(keystream)
        .map(|(&c, &k)| {
            let diff = c as i16 - k as i16;
            if diff <= 0 {
                (diff + ALPHABET as i16) as u8
            } else {
                diff as u8
            }
        })
        .collect())
}

fn check_inputs(message: &[u8], keystream: &[u8]) -> Result<(), CipherError> {
    if message.len() != keystream.len() {
        return Err(CipherError::LengthMismatch {
            message: message.len(),
            keystream: keystream.len(),
        });
    }
    if let Some(&value) = message
        .iter()
        .chain(keystream)
        .find(|v| !(1..=ALPHABET).contains(*v))
    {
        return Err(TextError::InvalidValue(value).into());
    }
    Ok(())
}

/// Encrypts a message with a deck using the default configuration.
pub fn encrypt(message: &str, deck: &Deck) -> Result<CipherOutput, CipherError> {
    encrypt_with_config(message, deck, &CipherConfig::default())
}

/// Encrypts a message with a deck.
///
/// The deck is the starting state; it is copied into a new session, so the
/// same deck can be passed to [`decrypt`] afterwards.
pub fn encrypt_with_config(
    message: &str,
    deck: &Deck,
    config: &CipherConfig,
) -> Result<CipherOutput, CipherError> {
    let mut generator = KeystreamGenerator::new(deck.clone());
    encrypt_with_keystream(message, &mut generator, config)
}

/// Encrypts a message with any keystream source.
pub fn encrypt_with_keystream<K: Keystream>(
    message: &str,
    keystream: &mut K,
    config: &CipherConfig,
) -> Result<CipherOutput, CipherError> {
    let filler = validate_filler(config.filler)?;
    let cleaned = clean_message(message, filler);
    if cleaned.is_empty() {
        return Err(CipherError::EmptyMessage);
    }

    let plain = letters_to_values(&cleaned);
    let stream = keystream.take_values(plain.len())?;
    let encrypted = encrypt_values(&plain, &stream)?;

    let mut text = values_to_letters(&encrypted)?;
    if config.grouped {
        text = group_letters(&text, GROUP_SIZE);
    }
    debug!(letters = plain.len(), "encrypted message");

    Ok(CipherOutput {
        text,
        keystream: stream,
    })
}

/// Decrypts a ciphertext with a deck.
///
/// Every character other than a letter is ignored, so grouped output decrypts
/// as is. Padding letters are kept in the result.
pub fn decrypt(ciphertext: &str, deck: &Deck) -> Result<CipherOutput, CipherError> {
    let mut generator = KeystreamGenerator::new(deck.clone());
    decrypt_with_keystream(ciphertext, &mut generator)
}

/// Decrypts a ciphertext with any keystream source.
pub fn decrypt_with_keystream<K: Keystream>(
    ciphertext: &str,
    keystream: &mut K,
) -> Result<CipherOutput, CipherError> {
    let cipher = letters_to_values(ciphertext);
    if cipher.is_empty() {
        return Err(CipherError::EmptyMessage);
    }

    let stream = keystream.take_values(cipher.len())?;
    let decrypted = decrypt_values(&cipher, &stream)?;
    debug!(letters = cipher.len(), "decrypted message");

    Ok(CipherOutput {
        text: values_to_letters(&decrypted)?,
        keystream: stream,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of values.
    struct FixedKeystream(std::vec::IntoIter<u8>);

    impl Keystream for FixedKeystream {
        fn next_value(&mut self) -> Result<u8, KeystreamError> {
            Ok(self.0.next().unwrap_or(1))
        }
    }

    #[test]
    fn test_encrypt_values_wraps() {
        assert_eq!(encrypt_values(&[1], &[1]).unwrap(), vec![2]);
        assert_eq!(encrypt_values(&[26], &[1]).unwrap(), vec![1]);
        assert_eq!(encrypt_values(&[25], &[26]).unwrap(), vec![25]);
        assert_eq!(encrypt_values(&[26], &[26]).unwrap(), vec![26]);
    }

    #[test]
    fn test_decrypt_values_wraps() {
        assert_eq!(decrypt_values(&[2], &[1]).unwrap(), vec![1]);
        assert_eq!(decrypt_values(&[1], &[1]).unwrap(), vec![26]);
        assert_eq!(decrypt_values(&[1], &[26]).unwrap(), vec![1]);
        assert_eq!(decrypt_values(&[3], &[20]).unwrap(), vec![9]);
    }

    #[test]
    fn test_values_roundtrip_all_pairs() {
        for p in 1..=26u8 {
            for k in 1..=26u8 {
                let c = encrypt_values(&[p], &[k]).unwrap();
                assert!((1..=26).contains(&c[0]));
                assert_eq!(decrypt_values(&c, &[k]).unwrap(), vec![p]);
            }
        }
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            encrypt_values(&[1, 2, 3], &[1, 2]),
            Err(CipherError::LengthMismatch {
                message: 3,
                keystream: 2
            })
        );
        assert!(matches!(
            decrypt_values(&[1], &[]),
            Err(CipherError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_values_out_of_range() {
        assert_eq!(
            encrypt_values(&[0], &[0]),
            Err(CipherError::Text(TextError::InvalidValue(0)))
        );
        assert_eq!(
            encrypt_values(&[1, 27], &[5, 5]),
            Err(CipherError::Text(TextError::InvalidValue(27)))
        );
        assert_eq!(
            encrypt_values(&[255], &[255]),
            Err(CipherError::Text(TextError::InvalidValue(255)))
        );
        assert_eq!(
            decrypt_values(&[3], &[0]),
            Err(CipherError::Text(TextError::InvalidValue(0)))
        );
        assert_eq!(
            decrypt_values(&[27], &[1]),
            Err(CipherError::Text(TextError::InvalidValue(27)))
        );
    }

    #[test]
    fn test_encrypt_known_message() {
        let output = encrypt("Hello, world!", &Deck::ordered()).unwrap();
        assert_eq!(output.text, "PUWTUVTSFK");
        assert_eq!(output.keystream, vec![8, 16, 11, 8, 6, 25, 5, 1, 20, 7]);
    }

    #[test]
    fn test_encrypt_grouped() {
        let config = CipherConfig {
            grouped: true,
            ..Default::default()
        };
        let output = encrypt_with_config("helloworld", &Deck::ordered(), &config).unwrap();
        assert_eq!(output.text, "PUWTU VTSFK");
    }

    #[test]
    fn test_decrypt_known_message() {
        let output = decrypt("PUWTU VTSFK", &Deck::ordered()).unwrap();
        assert_eq!(output.text, "HELLOWORLD");
    }

    #[test]
    fn test_roundtrip_keeps_padding() {
        let deck = Deck::ordered();
        let encrypted = encrypt("attack at dawn", &deck).unwrap();
        assert_eq!(encrypted.text.len(), 15);

        let decrypted = decrypt(&encrypted.text, &deck).unwrap();
        assert_eq!(decrypted.text, "ATTACKATDAWNXXX");
        assert_eq!(decrypted.keystream, encrypted.keystream);
    }

    #[test]
    fn test_custom_filler() {
        let config = CipherConfig {
            filler: 'Q',
            ..Default::default()
        };
        let deck = Deck::ordered();
        let encrypted = encrypt_with_config("abc", &deck, &config).unwrap();
        assert_eq!(decrypt(&encrypted.text, &deck).unwrap().text, "ABCQQ");
    }

    #[test]
    fn test_invalid_filler_rejected() {
        let config = CipherConfig {
            filler: '1',
            ..Default::default()
        };
        assert_eq!(
            encrypt_with_config("abc", &Deck::ordered(), &config),
            Err(CipherError::Text(TextError::InvalidFiller('1')))
        );

        let config = CipherConfig {
            filler: 'é',
            ..Default::default()
        };
        assert_eq!(
            encrypt_with_config("abc", &Deck::ordered(), &config),
            Err(CipherError::Text(TextError::InvalidFiller('é')))
        );
    }

    #[test]
    fn test_lowercase_filler_accepted() {
        let config = CipherConfig {
            filler: 'q',
            ..Default::default()
        };
        let deck = Deck::ordered();
        let encrypted = encrypt_with_config("abc", &deck, &config).unwrap();
        assert_eq!(encrypted.text.len(), 5);
        assert_eq!(decrypt(&encrypted.text, &deck).unwrap().text, "ABCQQ");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            encrypt("1234", &Deck::ordered()),
            Err(CipherError::EmptyMessage)
        );
        assert_eq!(
            decrypt("  ", &Deck::ordered()),
            Err(CipherError::EmptyMessage)
        );
    }

    #[test]
    fn test_custom_keystream_source() {
        let mut stream = FixedKeystream(vec![1, 2, 3, 4, 5].into_iter());
        let output =
            encrypt_with_keystream("aaaaa", &mut stream, &CipherConfig::default()).unwrap();
        assert_eq!(output.text, "BCDEF");

        let mut stream = FixedKeystream(vec![1, 2, 3, 4, 5].into_iter());
        let output = decrypt_with_keystream("BCDEF", &mut stream).unwrap();
        assert_eq!(output.text, "AAAAA");
    }

    #[test]
    fn test_deck_not_consumed() {
        let deck = Deck::ordered();
        encrypt("message", &deck).unwrap();
        assert_eq!(deck, Deck::ordered());
    }
}
