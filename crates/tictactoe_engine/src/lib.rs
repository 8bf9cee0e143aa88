//! Tic-tac-toe game engine.
//!
//! Pure game logic with no I/O: a [`Board`] holding nine squares and a
//! [`TurnController`] that seats two named [`Player`]s and drives the
//! board one round at a time.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Outcome, TurnController};
//!
//! let mut game = TurnController::new();
//! game.start_game(Some("Alice"), Some("Bob"));
//!
//! for index in [0, 1, 4, 2] {
//!     assert_eq!(game.play_round(index), None);
//! }
//! let outcome = game.play_round(8).expect("diagonal completed");
//! assert_eq!(outcome.to_string(), "Alice wins!");
//! assert!(game.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use controller::{GameSnapshot, Outcome, TurnController};
pub use player::{Player, default_name, resolve_name};
pub use position::Position;
pub use types::{GameStatus, Mark, Square};
