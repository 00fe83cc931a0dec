//! agrc - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use agrc::cli::{Cli, Commands};

/// Environment variable holding a tracing filter, e.g. `AGRC_LOG=debug`.
const LOG_ENV: &str = "AGRC_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Color {
            specs,
            raw,
            explain,
        } => commands::color::handle(&specs, raw, explain),
        Commands::Expand { path } => commands::expand::handle(&path),
        Commands::Show { config, json } => commands::show::handle(config.as_deref(), json),
    }
}
