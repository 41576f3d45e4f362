//! Error types for tracepack.

use std::path::PathBuf;
use thiserror::Error;

use crate::vector::WordError;

/// Errors raised by the log-to-table and vector-to-binary transforms.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file is missing or unreadable.
    #[error("cannot read input {}", path.display())]
    InputAccess {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Output file cannot be created or written.
    #[error("cannot write output {}", path.display())]
    OutputAccess {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// CSV encoder failure while writing table rows.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A vector line is not a base-10 integer.
    #[error("line {line}: '{text}' is not a base-10 integer")]
    Parse {
        /// 1-indexed line number in the input.
        line: usize,
        /// Offending line content, trimmed.
        text: String,
    },

    /// A vector value does not fit in one word.
    #[error("line {line}: cannot encode '{text}'")]
    Overflow {
        /// 1-indexed line number in the input.
        line: usize,
        /// Offending line content, trimmed.
        text: String,
        /// Encoding failure detail.
        #[source]
        source: WordError,
    },

    /// A binary vector is not a whole number of words.
    #[error("binary vector of {len} bytes is not a multiple of the word width")]
    TruncatedVector {
        /// Total byte length of the vector.
        len: usize,
    },

    /// I/O failure on a caller-supplied reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tracepack operations.
pub type Result<T> = std::result::Result<T, Error>;
