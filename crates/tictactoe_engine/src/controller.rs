//! Turn controller: two named players taking turns on one board.
//!
//! The controller is the only writer of its [`Board`]. It moves through
//! `NotStarted -> InProgress -> {Won, Drawn}`; [`TurnController::start_game`]
//! is the only way into `InProgress` and [`TurnController::play_round`]
//! the only way out.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::player::Player;
use crate::position::Position;
use crate::types::{GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a round that ended the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Win(Player),
    /// The board filled up without a completed line.
    Tie,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins!", player.name()),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Tic-tac-toe turn controller.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    players: [Player; 2],
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl TurnController {
    /// Creates a controller with no game started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(None, Mark::X), Player::new(None, Mark::O)],
            to_move: Mark::X,
            status: GameStatus::NotStarted,
            history: Vec::new(),
        }
    }

    /// Starts a fresh game, discarding any game in progress.
    ///
    /// The first name plays X and moves first; blank or missing names fall
    /// back to "Player 1" / "Player 2".
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name1: Option<&str>, name2: Option<&str>) {
        let players = [Player::new(name1, Mark::X), Player::new(name2, Mark::O)];
        info!(
            player_x = %players[0].name(),
            player_o = %players[1].name(),
            "Starting game"
        );

        self.players = players;
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.board.reset();
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Returns the outcome when the move ends the game, `None` when play
    /// continues. Moves that cannot be applied (no game, game over,
    /// occupied square, index outside 0-8) are ignored and also return
    /// `None`; use [`TurnController::make_move`] to see why.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> Option<Outcome> {
        match self.make_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(index, error = %e, "Move ignored");
                None
            }
        }
    }

    /// Plays the current player's mark at `index`, reporting rejections.
    ///
    /// A win is checked before a full board, so a move that completes a
    /// line on the last empty square is a win.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NotStarted`] before [`TurnController::start_game`]
    /// - [`MoveError::GameOver`] once the game has ended
    /// - [`MoveError::OutOfBounds`] when `index` is not 0-8
    /// - [`MoveError::SquareOccupied`] when the square already holds a mark
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<Option<Outcome>, MoveError> {
        match self.status {
            GameStatus::NotStarted => return Err(MoveError::NotStarted),
            GameStatus::Won(_) | GameStatus::Drawn => return Err(MoveError::GameOver),
            GameStatus::InProgress => {}
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let mark = self.to_move;
        if !self.board.set_cell(index, mark) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.history.push(Move::new(mark, position));
        debug!(%position, %mark, "Move applied");

        let outcome = if self.board.check_win(mark) {
            self.status = GameStatus::Won(mark);
            Some(Outcome::Win(self.seat(mark).clone()))
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            Some(Outcome::Tie)
        } else {
            self.to_move = mark.opponent();
            None
        };

        debug_assert_eq!(TicTacToeInvariants::check_all(self), Ok(()));

        if let Some(outcome) = &outcome {
            info!(%outcome, moves = self.history.len(), "Game over");
        }
        Ok(outcome)
    }

    /// The player who moves next.
    ///
    /// `None` before the first game and once the game is over.
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::InProgress => Some(self.seat(self.to_move)),
            _ => None,
        }
    }

    /// Returns a copy of the board squares.
    pub fn board(&self) -> [Square; 9] {
        self.board.cells()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Both players, X first. `None` before the first game.
    pub fn players(&self) -> Option<&[Player; 2]> {
        match self.status {
            GameStatus::NotStarted => None,
            _ => Some(&self.players),
        }
    }

    /// Accepted moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => Some(self.seat(mark)),
            _ => None,
        }
    }

    /// Serializable view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board(),
            status: self.status,
            current: self.current_player().cloned(),
            players: self.players().map(|p| p.to_vec()).unwrap_or_default(),
            history: self.history.clone(),
        }
    }

    fn seat(&self, mark: Mark) -> &Player {
        &self.players[mark.seat()]
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a game, for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Squares in row-major order.
    pub board: [Square; 9],
    /// Game status.
    pub status: GameStatus,
    /// Player to move, if the game is in progress.
    pub current: Option<Player>,
    /// Both players, X first; empty before the first game.
    pub players: Vec<Player>,
    /// Accepted moves in order.
    pub history: Vec<Move>,
}
