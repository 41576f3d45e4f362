use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracepack::config::{DEFAULT_BLOCK_MARKER, DEFAULT_SECTION_TOKEN};
use tracepack::table::{DEFAULT_LOG_PATH, DEFAULT_TABLE_PATH};
use tracepack::{log_to_table, ScanConfig};

mod logging;

use crate::logging::{setup_logging, LogArgs};

/// Extract DMA FIFO readings from `=== api values ===` blocks of a device log into CSV
#[derive(Parser)]
#[command(name = "log2csv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Device log to scan
    #[arg(value_name = "INPUT", default_value = DEFAULT_LOG_PATH)]
    input: PathBuf,

    /// CSV file to write (overwritten)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_TABLE_PATH)]
    output: PathBuf,

    /// Delimiter token on block header lines
    #[arg(
        long,
        value_name = "TOKEN",
        default_value = DEFAULT_BLOCK_MARKER,
        allow_hyphen_values = true
    )]
    block_marker: String,

    /// Section name on block header lines
    #[arg(
        long,
        value_name = "TOKEN",
        default_value = DEFAULT_SECTION_TOKEN,
        allow_hyphen_values = true
    )]
    section: String,

    #[command(flatten)]
    logging: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.logging);

    let config = ScanConfig {
        block_marker: cli.block_marker,
        section_token: cli.section,
    };
    log::debug!("Scanning {} with {:?}", cli.input.display(), config);

    let rows = log_to_table(&cli.input, &cli.output, &config).with_context(|| {
        format!(
            "Failed to extract {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    if !cli.logging.quiet {
        eprintln!(
            "CSV file created successfully. Wrote {} rows to {}",
            rows,
            cli.output.display()
        );
    }

    Ok(())
}
