//! Tic-tac-toe with time travel - terminal client
//!
//! Plays interactively in the terminal or replays a list of cells.

#![warn(missing_docs)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .context("Failed to load configuration")?
        .with_log_file(cli.log_file);
    logging::init(&config)?;
    info!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { cells, jump, json } => {
            let output = replay::run_replay(&cells, jump, json)?;
            print!("{}", output);
            if json {
                println!();
            }
            Ok(())
        }
    }
}
