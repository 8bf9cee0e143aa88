//! 3x3 board storage.

use crate::position::Position;
use crate::rules;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A square, once occupied, is never overwritten: [`Board::set_cell`] is
/// the only mutator and it refuses occupied squares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a detached board from a copy of squares, e.g. for rendering.
    pub fn from_cells(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Returns a copy of all squares.
    ///
    /// The returned array is detached from the board; mutating it has no
    /// effect on later reads.
    pub fn cells(&self) -> [Square; 9] {
        self.squares
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Writes `mark` at `index` if that square is empty.
    ///
    /// Returns `false` and leaves the board untouched when the square is
    /// occupied or `index` is outside 0-8.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, mark: Mark) -> bool {
        match self.squares.get_mut(index) {
            Some(square) if square.is_empty() => {
                *square = Square::Occupied(mark);
                true
            }
            Some(_) => {
                trace!(index, "square already occupied");
                false
            }
            None => {
                trace!(index, "index out of range");
                false
            }
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks whether `mark` occupies a full row, column or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.squares, mark)
    }

    /// Returns the mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.squares)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// Formats the board with 1-based numbers on empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, " {} ", pos + 1)?,
                    Square::Occupied(mark) => write!(f, " {} ", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells(), [Square::Empty; 9]);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_set_cell_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.set_cell(4, Mark::X));
        assert!(!board.set_cell(4, Mark::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_set_cell_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.set_cell(9, Mark::X));
        assert!(!board.set_cell(usize::MAX, Mark::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cells_is_a_copy() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);
        let mut copy = board.cells();
        copy[0] = Square::Empty;
        copy[1] = Square::Occupied(Mark::O);
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert!(board.is_empty(Position::TopCenter));
    }

    #[test]
    fn test_reset_clears() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);
        board.set_cell(8, Mark::O);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_positions_filters_occupied() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);
        board.set_cell(4, Mark::O);

        let valid = board.empty_positions();
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set_cell(0, Mark::X);
        board.set_cell(4, Mark::O);
        let text = board.to_string();
        assert_eq!(
            text,
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }
}
