//! # ugen
//!
//! Generates unique random strings from the command line:
//!
//! - **Character strings** drawn from digits and ASCII letters, or digits only
//! - **Raw bytes**, optionally base64 or hex encoded
//! - **Identifiers**: ULIDs (plain or in UUID form), UUIDv4 and UUIDv7
//! - **Integers** from a half-open interval
//!
//! Every value may carry a prefix and suffix, be case folded, and is joined
//! with a configurable separator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            ugen                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌─────────┐  │
//! │  │    CLI    │→ │  Domain   │→ │  Generator  │→ │ Sampler │  │
//! │  │  (clap)   │  │  Config   │  │  + Format   │  │ (OsRng) │  │
//! │  └───────────┘  └───────────┘  └─────────────┘  └─────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{AppConfig, DefaultsConfig, ObservabilityConfig};
use crate::service::Generator;

/// Run the generator for a parsed command line.
///
/// Loads the environment configuration, initializes logging and writes the
/// generated values to stdout. A trailing line feed is added when stdout is
/// a terminal.
///
/// Generation failures are reported on stderr and mapped to the returned
/// exit code.
///
/// # Errors
///
/// Returns an error if the environment configuration cannot be loaded.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_logging(&config.observability);

    let stdout = io::stdout();
    let trailing_line_feed = stdout.is_terminal();
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        trailing_line_feed, "Starting ugen"
    );

    match execute(cli, &config.defaults, stdout.lock(), trailing_line_feed) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let code = err.error_code();
            debug!(%code, category = %code.category(), error = %err, "Generation failed");
            eprintln!("ugen: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Generate the values requested by `cli` into `writer`.
///
/// Output is buffered and flushed before returning.
///
/// # Errors
///
/// Returns an error if the flags resolve to an invalid configuration, the
/// random source fails or the writer rejects the output.
pub fn execute<W: Write>(
    cli: &Cli,
    defaults: &DefaultsConfig,
    writer: W,
    trailing_line_feed: bool,
) -> error::Result<()> {
    let config = cli.generation_config(defaults, trailing_line_feed)?;
    let mut generator = Generator::new(config);

    let mut writer = BufWriter::new(writer);
    generator.generate(&mut writer, cli.count(defaults), cli.length(defaults))?;
    writer.flush()?;

    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);
    let ansi = io::stderr().is_terminal();

    if config.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_ansi(ansi).with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(ansi).with_writer(io::stderr))
            .init();
    }
}
