//! primer CLI - prints a greeting and two sample calculations
//!
//! Output goes to stdout; diagnostics go to stderr through `tracing`.

#![forbid(unsafe_code)]

mod cli;
mod demo;
mod error;
mod logging;

use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use cli::Cli;
use error::{exit_codes, CliError};

fn run(cli: &Cli) -> Result<i32, CliError> {
    debug!(verbose = cli.verbose, "primer started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::render(&mut out)?;
    out.flush()?;

    Ok(exit_codes::SUCCESS)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("primer: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
