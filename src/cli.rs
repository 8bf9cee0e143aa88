//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Front-end to run (defaults to the TUI)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Game options, accepted before or after the subcommand
    #[command(flatten)]
    pub game: GameArgs,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play by typing commands, one per line
    Console,
}

/// Options shared by both front-ends.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Name of the player holding X (moves first)
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name of the player holding O
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Path to the TOML settings file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Comma-separated cell indices (0-8) to pre-play after each start
    #[arg(long, global = true, value_parser = parse_seed_arg)]
    pub seed: Option<SeedMoves>,
}

/// Parsed `--seed` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMoves(pub Vec<usize>);

fn parse_seed_arg(s: &str) -> Result<SeedMoves, String> {
    tictactoe::parse_seed(s).map(SeedMoves).map_err(|e| e.message)
}
