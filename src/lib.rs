//! jot - jot down notes into labelled, severity-tagged SQLite tables

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_clear, handle_completions, handle_show, handle_stats, handle_write},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions depend only on the command definitions
    if let Some(Command::Completions(args)) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load(cli.config.as_deref())?;
    let db_path = config.database_path(cli.db.as_ref())?;
    tracing::debug!(db = %db_path.display(), "resolved database path");

    match &cli.command {
        None => handle_write(&cli.write, &config, &db_path),
        Some(Command::Show(args)) => handle_show(args, &config, &db_path),
        Some(Command::Clear(args)) => handle_clear(args, &config, &db_path),
        Some(Command::Stats(args)) => handle_stats(args, &db_path),
        Some(Command::Completions(_)) => Ok(()),
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
