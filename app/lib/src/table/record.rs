//! Output rows of the FIFO occupancy table.

use serde::Serialize;

/// Column names of the output table, in order.
pub const HEADER: [&str; 4] = [
    "Timestamp",
    "ADDR_HIF2CPU_C_NOF_ELEMENTS_PENDING_ON_DMA_FIFO",
    "ADDR_HIF2CPU_C_NOF_RESULTS_PENDING_ON_DMA_FIFO",
    "ADDR_HIF2CPU_C_MAX_RECORDED_PENDING_RESULTS",
];

/// One table row: the block timestamp and its three register readings.
///
/// Values are kept as the raw text found after `value:` so that the table
/// reproduces the log verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Text inside the first `[...]` of the block header line.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    /// First reading of the block.
    #[serde(rename = "ADDR_HIF2CPU_C_NOF_ELEMENTS_PENDING_ON_DMA_FIFO")]
    pub elements_pending: String,
    /// Second reading of the block.
    #[serde(rename = "ADDR_HIF2CPU_C_NOF_RESULTS_PENDING_ON_DMA_FIFO")]
    pub results_pending: String,
    /// Third reading of the block.
    #[serde(rename = "ADDR_HIF2CPU_C_MAX_RECORDED_PENDING_RESULTS")]
    pub max_recorded_pending: String,
}

impl Record {
    /// Build a record from a timestamp and the three readings of a block.
    pub fn new(timestamp: impl Into<String>, values: [String; 3]) -> Self {
        let [elements_pending, results_pending, max_recorded_pending] = values;
        Self {
            timestamp: timestamp.into(),
            elements_pending,
            results_pending,
            max_recorded_pending,
        }
    }
}
