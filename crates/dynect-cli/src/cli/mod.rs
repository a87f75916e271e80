//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use std::time::Duration;

use crate::config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Credentials are loaded and validated before any network call.
    let credentials = config::load_credentials(&cli.config)?;

    let ctx = commands::Context {
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout),
        nodes: cli.nodes,
        file: cli.file,
    };

    commands::list::execute(&ctx, &credentials).await
}

/// Logs go to stderr so that stdout stays reserved for the listing.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
