//! CSV output for extracted records.

use std::io;

use crate::error::Result;

use super::record::{Record, HEADER};

/// Write the fixed header followed by `records` as CSV.
///
/// Fields are quoted only when they contain a delimiter, quote or line break.
/// Rows end in `\r\n`.
pub fn write_table<W: io::Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    // Written explicitly so that an empty table still carries its header.
    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
