//! Game rules for tic-tac-toe.
//!
//! Pure functions over a square grid. Rules are kept apart from board
//! storage so the board, the controller and the invariants share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_win, winner};
