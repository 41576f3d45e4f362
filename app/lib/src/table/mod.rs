//! Log-to-table extraction.
//!
//! This module turns `=== api values ===` scan blocks in device logs into
//! rows of a four-column CSV table of DMA FIFO readings.

mod record;
mod scanner;
mod transform;
mod writer;

pub use record::{Record, HEADER};
pub use scanner::{Block, BlockScanner, VALUES_PER_BLOCK, VALUE_TOKEN};
pub use transform::{log_to_table, DEFAULT_LOG_PATH, DEFAULT_TABLE_PATH};
pub use writer::write_table;
