//! Command-line argument definitions.

use clap::Parser;

/// Print a greeting and two sample calculations.
#[derive(Debug, Parser)]
#[command(name = "primer", version)]
pub struct Cli {
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
