//! uconv command-line entry point
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`; stdout carries
//! only the prompt and replies.

use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use uconv::Session;

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "I/O failure, shutting down");
            ExitCode::FAILURE
        }
    }
}
