//! Text processing around the cipher.
//!
//! This module provides:
//! - Message cleanup (letters only, upper case, five-letter padding)
//! - Letter/value conversion (A=1 … Z=26)
//! - Output grouping

pub mod letters;

pub use letters::{
    clean_message, group_letters, letters_to_values, validate_filler, values_to_letters, TextError,
};
