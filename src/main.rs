//! algoviz CLI - step-by-step algorithm visualizations.
//!
//! Log verbosity is controlled with `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use algoviz::cli::{run_cli, Args};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    run_cli(Args::parse())
}
