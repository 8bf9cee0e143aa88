//! Monotonic board invariant: squares are never overwritten or cleared mid-game.

use super::Invariant;
use crate::controller::TurnController;
use crate::types::Square;

/// Invariant: every recorded move is still on the board with the mark
/// that played it, and nothing else is.
pub struct MonotonicBoardInvariant;

impl Invariant<TurnController> for MonotonicBoardInvariant {
    fn holds(game: &TurnController) -> bool {
        let cells = game.board();
        let occupied = cells.iter().filter(|s| !s.is_empty()).count();

        occupied == game.history().len()
            && game
                .history()
                .iter()
                .all(|m| cells[m.position.to_index()] == Square::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "Board squares are never overwritten (monotonic)"
    }
}
