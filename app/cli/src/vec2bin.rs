use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracepack::{vector_to_binary, WordEncoding, WORD_BYTES};

mod logging;

use crate::logging::{setup_logging, LogArgs};

/// Pack a text vector of decimal integers into 32-byte little-endian words
#[derive(Parser)]
#[command(name = "vec2bin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file with one decimal integer per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Binary file to write (overwritten)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Store values as unsigned magnitudes instead of two's complement
    #[arg(long)]
    unsigned: bool,

    #[command(flatten)]
    logging: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.logging);

    let encoding = if cli.unsigned {
        WordEncoding::Unsigned
    } else {
        WordEncoding::Signed
    };

    let words = vector_to_binary(&cli.input, &cli.output, encoding).with_context(|| {
        format!(
            "Failed to pack {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    if !cli.logging.quiet {
        eprintln!(
            "Wrote {} words ({} bytes) to {}",
            words,
            words * WORD_BYTES,
            cli.output.display()
        );
    }

    Ok(())
}
