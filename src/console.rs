//! Line-oriented front-end.
//!
//! Reads one command per line and re-renders the board after every move
//! command, whether the engine accepted the move or not.

use crate::session::GameSession;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: 1-9 play a cell, new, board, state, help, quit";
const RESTART_HINT: &str = "Type 'new' to play again.";

/// One parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell at this 0-based index.
    Play(usize),
    /// Start a new game.
    New,
    /// Print the board.
    Board,
    /// Print a JSON snapshot.
    State,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

impl Command {
    /// Parses a line. Cells are numbered 1-9 for people; labels such as
    /// `center` are accepted as well.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "new" | "n" | "restart" => Some(Command::New),
            "board" | "b" => Some(Command::Board),
            "state" | "json" => Some(Command::State),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => Some(Command::Play(n - 1)),
                Ok(_) => None,
                Err(_) => Position::from_label_or_number(other)
                    .map(|pos| Command::Play(pos.to_index())),
            },
        }
    }
}

/// Runs the console loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    info!("Starting console session");
    render(session, output)?;
    write_prompt(output)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Unrecognized input '{}'. {}", line.trim(), HELP)?;
            write_prompt(output)?;
            continue;
        };
        debug!(?command, "Console command");

        match command {
            Command::Play(index) => {
                if session.game().is_game_over() {
                    writeln!(output, "Game over. {}", RESTART_HINT)?;
                } else {
                    session.play(index);
                    render(session, output)?;
                }
            }
            Command::New => {
                session.restart();
                render(session, output)?;
            }
            Command::Board => render(session, output)?,
            Command::State => {
                let json = serde_json::to_string_pretty(&session.game().snapshot())?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {
                info!("Console session ended by user");
                return Ok(());
            }
        }
        write_prompt(output)?;
    }

    info!("Console input closed");
    Ok(())
}

fn render<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    let board = Board::from_cells(session.game().board());
    writeln!(output)?;
    writeln!(output, "{}", board)?;
    writeln!(output)?;
    writeln!(output, "{}", session.status_with_hint(RESTART_HINT))
}

fn write_prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
