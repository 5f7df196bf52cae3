//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;
use crate::presentation::OutputFormat;

/// Command-line interface for the accent color detector.
///
/// Running without a subcommand is the same as `detect`.
#[derive(Debug, Parser)]
#[command(name = "accent-color")]
#[command(about = "Detect the desktop accent color on Linux")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        env = "ACCENT_COLOR_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Enable verbose/debug output (ignored when RUST_LOG is set)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
