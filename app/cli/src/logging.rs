//! Logging flags and `env_logger` setup shared by the tracepack binaries.

use clap::Args;
use log::LevelFilter;

/// Verbosity flags common to every tool.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    /// Level forced by the flags, if any. `RUST_LOG` applies otherwise.
    fn level(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::Debug)
        } else if self.quiet {
            Some(LevelFilter::Error)
        } else {
            None
        }
    }
}

/// Set up logging based on verbosity flags.
pub fn setup_logging(args: &LogArgs) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = args.level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    builder.init();
}
