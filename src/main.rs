//! ugen entry point.
//!
//! Loads an optional `.env`, parses the command line and hands off to
//! [`ugen::run`].

use std::process::ExitCode;

use clap::Parser;
use ugen::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    ugen::run(&cli)
}
