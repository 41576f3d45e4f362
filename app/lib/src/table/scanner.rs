//! Scan-block extraction from device logs.
//!
//! A block starts at a header line such as `[10:42:07.311] === api values ===`
//! and runs until the next header line or end of input. Every line inside it
//! that carries `value:` contributes the text after the token. Only blocks
//! with exactly three readings and a bracketed timestamp become records;
//! everything else is dropped without error.

use std::borrow::Cow;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::ScanConfig;

use super::record::Record;

/// Substring that marks a reading line.
pub const VALUE_TOKEN: &str = "value:";

/// Number of readings a block must carry to produce a record.
pub const VALUES_PER_BLOCK: usize = 3;

// `$` stops before the line terminator, which is kept on each line so that a
// bare `value:` still satisfies `\s+`.
static VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)value:\s+(.*?)$").expect("Invalid value regex"));

static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("Invalid timestamp regex"));

/// A block header and the readings found beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-indexed line number of the header.
    pub line: usize,
    /// Header line, including its terminator if present.
    pub header: &'a str,
    /// Captured readings in file order.
    pub values: Vec<&'a str>,
}

impl Block<'_> {
    /// Timestamp from the first bracketed substring of the header.
    pub fn timestamp(&self) -> Option<&str> {
        TIMESTAMP_PATTERN
            .captures(self.header)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Convert into a record, or `None` if the block is malformed.
    pub fn to_record(&self) -> Option<Record> {
        let [first, second, third] =
            <[&str; VALUES_PER_BLOCK]>::try_from(self.values.as_slice()).ok()?;
        let timestamp = self.timestamp()?;
        Some(Record::new(
            timestamp,
            [first.to_string(), second.to_string(), third.to_string()],
        ))
    }
}

/// Extracts FIFO records from log text.
#[derive(Debug, Clone, Default)]
pub struct BlockScanner {
    config: ScanConfig,
}

impl BlockScanner {
    /// Create a scanner with the default block tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with the given configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Extract every well-formed record from `text`, in file order.
    pub fn scan(&self, text: &str) -> Vec<Record> {
        let text = normalize_newlines(text);
        let lines: Vec<&str> = text.split_inclusive('\n').collect();

        let mut records = Vec::new();
        for block in self.blocks(&lines) {
            match block.to_record() {
                Some(record) => records.push(record),
                None => debug!(
                    "Skipping block at line {}: {} readings, timestamp {}",
                    block.line,
                    block.values.len(),
                    if block.timestamp().is_some() { "present" } else { "missing" }
                ),
            }
        }
        records
    }

    /// Collect every block in `lines`.
    ///
    /// A reading line takes precedence over a header: a line carrying both
    /// `value:` and the header tokens is read as a reading and does not close
    /// the current block. It still opens a block of its own.
    pub fn blocks<'a>(&self, lines: &[&'a str]) -> Vec<Block<'a>> {
        let mut blocks = Vec::new();

        for (index, &header) in lines.iter().enumerate() {
            if !self.config.is_block_start(header) {
                continue;
            }

            let mut values = Vec::new();
            for &line in &lines[index + 1..] {
                if line.contains(VALUE_TOKEN) {
                    if let Some(value) = capture_value(line) {
                        values.push(value);
                    }
                } else if self.config.is_block_start(line) {
                    break;
                }
            }

            blocks.push(Block {
                line: index + 1,
                header,
                values,
            });
        }

        blocks
    }
}

/// Text following `value:` and at least one whitespace character.
fn capture_value(line: &str) -> Option<&str> {
    VALUE_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Map `\r\n` and lone `\r` line breaks to `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
