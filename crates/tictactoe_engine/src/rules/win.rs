//! Win detection logic for tic-tac-toe.

use crate::types::{Mark, Square};

/// The 8 winning triples as board indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` fully occupies at least one winning triple.
pub fn check_win(squares: &[Square; 9], mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(mark)))
}

/// Returns the mark owning a completed line, if any.
pub fn winner(squares: &[Square; 9]) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(squares, mark))
}
