//! lister entry point.
//!
//! Logging goes to stderr and is controlled by `LISTER_LOG`
//! (e.g. `LISTER_LOG=lister=debug`); the default shows warnings only.

use std::process::ExitCode;

use clap::Parser;
use lister::cli::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("LISTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(filter)
        .init();

    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("lister: {e:#}");
            ExitCode::FAILURE
        }
    }
}
