//! # tracepack
//!
//! Two file transforms for accelerator bring-up data:
//!
//! - [`table`] extracts DMA FIFO readings from `=== api values ===` scan
//!   blocks in a device log and writes them as CSV rows.
//! - [`vector`] packs a text vector of decimal integers into 32-byte
//!   little-endian words.
//!
//! ```no_run
//! use tracepack::{log_to_table, vector_to_binary, ScanConfig, WordEncoding};
//!
//! # fn main() -> tracepack::Result<()> {
//! let rows = log_to_table("test.log", "output.csv", &ScanConfig::default())?;
//! let words = vector_to_binary("input.txt", "input.bin", WordEncoding::Signed)?;
//! # let _ = (rows, words);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod table;
pub mod vector;

pub use config::{ScanConfig, WordEncoding};
pub use error::{Error, Result};
pub use table::{log_to_table, BlockScanner, Record};
pub use vector::{decode_words, encode_word, vector_to_binary, WordError, WORD_BYTES};
