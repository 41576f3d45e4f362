//! Vector-to-binary packing.
//!
//! This module converts text vectors, one decimal integer per line, into flat
//! files of 32-byte little-endian words and back.

mod transform;
mod word;

pub use transform::{decode_words, encode_lines, vector_to_binary};
pub use word::{decode_word, encode_word, parse_integer, Word, WordError, WORD_BYTES};
