//! reviewdoc CLI binary entry point
//!
//! This is a thin wrapper that sets up logging and calls the library's
//! `run_cli()` function.

use anyhow::Result;
use reviewdoc_cli::{log_filter, run_cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
