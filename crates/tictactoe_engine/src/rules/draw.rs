//! Draw detection logic for tic-tac-toe.

use crate::types::Square;

/// Checks if every square is occupied.
///
/// A full board only means a draw once no winner was found.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}
