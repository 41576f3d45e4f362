//! File-to-file log extraction.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::ScanConfig;
use crate::error::{Error, Result};

use super::scanner::BlockScanner;
use super::writer::write_table;

/// Default input path for log extraction.
pub const DEFAULT_LOG_PATH: &str = "test.log";

/// Default output path for log extraction.
pub const DEFAULT_TABLE_PATH: &str = "output.csv";

/// Extract records from the log at `input` and write them as CSV to `output`.
///
/// The output is overwritten. Returns the number of data rows written.
pub fn log_to_table(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ScanConfig,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = fs::read_to_string(input).map_err(|source| Error::InputAccess {
        path: input.to_path_buf(),
        source,
    })?;

    let records = BlockScanner::with_config(config.clone()).scan(&text);

    // Rendered in memory so that every file-system failure maps to the output path.
    let mut buffer = Vec::new();
    write_table(&mut buffer, &records)?;
    fs::write(output, buffer).map_err(|source| Error::OutputAccess {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} records from {} to {}",
        records.len(),
        input.display(),
        output.display()
    );
    Ok(records.len())
}
