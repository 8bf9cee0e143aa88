//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::controller::TurnController;
use crate::types::{GameStatus, Mark};

/// Invariant: players alternate turns, X first.
///
/// While the game is in progress the mark to move is the one that did
/// not place the last entry of the history.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn history_alternates(marks: &[Mark]) -> bool {
        match marks.first() {
            None => true,
            Some(Mark::O) => false,
            Some(Mark::X) => marks.windows(2).all(|w| w[0] != w[1]),
        }
    }
}

impl Invariant<TurnController> for AlternatingTurnInvariant {
    fn holds(game: &TurnController) -> bool {
        let marks: Vec<Mark> = game.history().iter().map(|m| m.mark).collect();
        if !Self::history_alternates(&marks) {
            return false;
        }

        if game.status() != GameStatus::InProgress {
            return true;
        }

        let expected = if marks.len() % 2 == 0 { Mark::X } else { Mark::O };
        game.current_player().map(|p| *p.mark()) == Some(expected)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_shapes() {
        assert!(AlternatingTurnInvariant::history_alternates(&[]));
        assert!(AlternatingTurnInvariant::history_alternates(&[
            Mark::X,
            Mark::O,
            Mark::X
        ]));
        assert!(!AlternatingTurnInvariant::history_alternates(&[Mark::O]));
        assert!(!AlternatingTurnInvariant::history_alternates(&[
            Mark::X,
            Mark::X
        ]));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = TurnController::new();
        game.start_game(None, None);
        assert!(AlternatingTurnInvariant::holds(&game));
        for index in [0, 3, 1, 4, 2] {
            game.play_round(index);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert!(game.is_game_over());
    }
}
