//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::{AppConfig, init_tracing, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let config = base.with_overrides(cli.overrides());

    init_tracing(config.log_file())?;
    info!(?config, "Configuration resolved");

    tui::run(&config)
}
