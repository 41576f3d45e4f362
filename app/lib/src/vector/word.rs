//! Fixed-width little-endian integer words.

use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use thiserror::Error;

use crate::config::WordEncoding;

/// Width of one encoded word in bytes.
pub const WORD_BYTES: usize = 32;

/// A single encoded word.
pub type Word = [u8; WORD_BYTES];

/// Reasons an integer cannot be stored in a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// The value needs more bytes than the word provides.
    #[error("value needs {required} bytes, word holds {width}")]
    TooWide {
        /// Minimal byte length of the value in the chosen encoding.
        required: usize,
        /// Word width in bytes.
        width: usize,
    },

    /// Unsigned words cannot hold negative values.
    #[error("negative value cannot be stored in an unsigned word")]
    Negative,
}

/// Parse a base-10 integer, ignoring surrounding whitespace.
///
/// Accepts an optional leading `+` or `-` and single `_` separators between
/// digits.
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if !is_digit_groups(digits) {
        return None;
    }
    BigInt::from_str(text).ok()
}

/// True if `digits` is one or more runs of ASCII digits joined by single `_`.
fn is_digit_groups(digits: &str) -> bool {
    digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Encode `value` into one little-endian word.
pub fn encode_word(value: &BigInt, encoding: WordEncoding) -> Result<Word, WordError> {
    let (bytes, fill) = match encoding {
        WordEncoding::Signed => {
            let fill = if value.is_negative() { 0xFF } else { 0x00 };
            (value.to_signed_bytes_le(), fill)
        }
        WordEncoding::Unsigned => {
            if value.is_negative() {
                return Err(WordError::Negative);
            }
            (value.to_bytes_le().1, 0x00)
        }
    };

    if bytes.len() > WORD_BYTES {
        return Err(WordError::TooWide {
            required: bytes.len(),
            width: WORD_BYTES,
        });
    }

    let mut word = [fill; WORD_BYTES];
    word[..bytes.len()].copy_from_slice(&bytes);
    Ok(word)
}

/// Decode one little-endian word back into an integer.
pub fn decode_word(word: &[u8], encoding: WordEncoding) -> BigInt {
    match encoding {
        WordEncoding::Signed => BigInt::from_signed_bytes_le(word),
        WordEncoding::Unsigned => BigInt::from_bytes_le(Sign::Plus, word),
    }
}
