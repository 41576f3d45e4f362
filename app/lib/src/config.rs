//! Configuration for the log scanner and the word encoder.

/// Token marking a scan-block header line.
pub const DEFAULT_BLOCK_MARKER: &str = "===";

/// Token that must accompany the block marker on a header line.
pub const DEFAULT_SECTION_TOKEN: &str = "api values";

/// Settings for locating scan blocks in a log.
///
/// A line starts a block when it contains both `block_marker` and
/// `section_token`. Matching is case-sensitive and unanchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Delimiter token on block header lines.
    pub block_marker: String,
    /// Section name on block header lines.
    pub section_token: String,
}

impl ScanConfig {
    /// Returns true if `line` is a block-start marker.
    pub fn is_block_start(&self, line: &str) -> bool {
        line.contains(&self.block_marker) && line.contains(&self.section_token)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_marker: DEFAULT_BLOCK_MARKER.to_string(),
            section_token: DEFAULT_SECTION_TOKEN.to_string(),
        }
    }
}

/// How integers map onto fixed-width words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordEncoding {
    /// Two's complement; range `-2^255 ..= 2^255 - 1` for 32-byte words.
    #[default]
    Signed,
    /// Plain magnitude; range `0 ..= 2^256 - 1`, negatives rejected.
    Unsigned,
}
