//! Binary crate for the `weatherfit` widget preview tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Printing the widget presentation model

use clap::Parser;

mod cli;
mod render;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `render --json` output stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherfit=warn,weatherfit_core=warn".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run()
}
