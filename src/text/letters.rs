//! Letter handling around the keystream.
//!
//! Messages are reduced to the letters A–Z before encryption, padded to a
//! whole number of five-letter groups, and mapped to values A=1 … Z=26.

use thiserror::Error;

use crate::GROUP_SIZE;

/// Errors that can occur when converting between letters and values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Letter value {0} is outside 1..=26")]
    InvalidValue(u8),

    #[error("Filler must be a letter A-Z, got '{0}'")]
    InvalidFiller(char),
}

/// Cleans a message for encryption.
///
/// Keeps only ASCII letters, upper-cases them, and pads with `filler` up to
/// a multiple of [`GROUP_SIZE`]. A message without letters cleans to an
/// empty string.
pub fn clean_message(input: &str, filler: char) -> String {
    let mut cleaned: String = input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut letters = cleaned.chars().count();
    while letters % GROUP_SIZE != 0 {
        cleaned.push(filler);
        letters += 1;
    }
    cleaned
}

/// Maps letters to values (A=1 … Z=26). Anything else is skipped.
pub fn letters_to_values(text: &str) -> Vec<u8> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase() as u8 - b'A' + 1)
        .collect()
}

/// Maps values back to upper-case letters.
pub fn values_to_letters(values: &[u8]) -> Result<String, TextError> {
    values
        .iter()
        .map(|&v| {
            if (1..=26).contains(&v) {
                Ok((b'A' + v - 1) as char)
            } else {
                Err(TextError::InvalidValue(v))
            }
        })
        .collect()
}

/// Splits text into space-separated groups of `size` characters.
pub fn group_letters(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }
    text.chars()
        .collect::<Vec<_>>()
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks a padding letter, returning it upper-cased.
pub fn validate_filler(filler: char) -> Result<char, TextError> {
    if filler.is_ascii_alphabetic() {
        Ok(filler.to_ascii_uppercase())
    } else {
        Err(TextError::InvalidFiller(filler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_and_uppercases() {
        assert_eq!(clean_message("Hello, World!", 'X'), "HELLOWORLD");
        assert_eq!(clean_message("a1b2c3d4e5", 'X'), "ABCDE");
    }

    #[test]
    fn test_clean_pads_to_group() {
        assert_eq!(clean_message("Do not use PC", 'X'), "DONOTUSEPC");
        assert_eq!(clean_message("attack", 'X'), "ATTACKXXXX");
        assert_eq!(clean_message("abc", 'Q'), "ABCQQ");
    }

    #[test]
    fn test_clean_drops_non_ascii() {
        assert_eq!(clean_message("mañana", 'X'), "MAANA");
    }

    #[test]
    fn test_clean_multiline_is_one_stream() {
        assert_eq!(clean_message("ab\ncd\nef", 'X'), "ABCDEFXXXX");
    }

    #[test]
    fn test_clean_pads_by_characters() {
        assert_eq!(clean_message("abc", 'é'), "ABCéé");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_message("", 'X'), "");
        assert_eq!(clean_message("123 !?", 'X'), "");
    }

    #[test]
    fn test_letters_to_values() {
        assert_eq!(letters_to_values("AZ"), vec![1, 26]);
        assert_eq!(letters_to_values("abc"), vec![1, 2, 3]);
        assert_eq!(letters_to_values("PUWTU VTSFK"), letters_to_values("PUWTUVTSFK"));
    }

    #[test]
    fn test_values_to_letters() {
        assert_eq!(values_to_letters(&[1, 2, 26]).unwrap(), "ABZ");
        assert_eq!(values_to_letters(&[]).unwrap(), "");
        assert_eq!(values_to_letters(&[1, 0]), Err(TextError::InvalidValue(0)));
        assert_eq!(values_to_letters(&[27]), Err(TextError::InvalidValue(27)));
    }

    #[test]
    fn test_group_letters() {
        assert_eq!(group_letters("PUWTUVTSFK", 5), "PUWTU VTSFK");
        assert_eq!(group_letters("ABCDEFG", 5), "ABCDE FG");
        assert_eq!(group_letters("", 5), "");
        assert_eq!(group_letters("ABC", 0), "ABC");
    }

    #[test]
    fn test_validate_filler() {
        assert_eq!(validate_filler('x'), Ok('X'));
        assert_eq!(validate_filler('Z'), Ok('Z'));
        assert_eq!(validate_filler('1'), Err(TextError::InvalidFiller('1')));
        assert_eq!(validate_filler('é'), Err(TextError::InvalidFiller('é')));
    }
}
