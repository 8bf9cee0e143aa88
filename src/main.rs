//! Tic-tac-toe - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use std::sync::Arc;
use tictactoe::{GameSession, Settings, console, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);
    let settings = load_settings(&cli.game)?;

    match command {
        Command::Console => {
            init_stderr_tracing();
            run_console(settings)
        }
        Command::Tui => {
            init_file_tracing(&settings)?;
            tui::run(GameSession::new(settings))
        }
    }
}

fn load_settings(args: &GameArgs) -> Result<Settings> {
    let settings = Settings::load(&args.config)?.with_overrides(
        args.player_x.clone(),
        args.player_o.clone(),
        args.seed.clone().map(|s| s.0),
    )?;
    Ok(settings)
}

#[instrument(skip_all)]
fn run_console(settings: Settings) -> Result<()> {
    info!("Starting console mode");
    let mut session = GameSession::new(settings);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console::run(&mut session, stdin.lock(), &mut stdout)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console output shares the terminal with logs, so logs go to stderr.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs go to a file so they do not corrupt the TUI.
fn init_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
