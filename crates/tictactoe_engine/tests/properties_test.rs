//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_engine::{Board, Mark, Outcome, Square, TurnController, rules::LINES};

fn permutation() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

proptest! {
    #[test]
    fn prop_nine_moves_without_a_line_tie(moves in permutation()) {
        let mut game = TurnController::new();
        game.start_game(Some("P1"), Some("P2"));

        let results: Vec<Option<Outcome>> = moves.iter().map(|&i| game.play_round(i)).collect();
        let any_win = results.iter().any(|r| matches!(r, Some(Outcome::Win(_))));
        if !any_win {
            prop_assert!(results[..8].iter().all(Option::is_none));
            prop_assert_eq!(results[8].as_ref().map(ToString::to_string), Some("It's a tie!".to_string()));
            prop_assert!(game.board().iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn prop_occupied_cell_is_never_overwritten(index in 0usize..9, first in mark(), second in mark()) {
        let mut board = Board::new();
        prop_assert!(board.set_cell(index, first));
        prop_assert!(!board.set_cell(index, second));
        prop_assert_eq!(board.cells()[index], Square::Occupied(first));
    }

    #[test]
    fn prop_board_copy_is_detached(moves in prop::collection::vec(0usize..9, 0..9)) {
        let mut game = TurnController::new();
        game.start_game(None, None);
        for index in moves {
            game.play_round(index);
        }

        let before = game.board();
        let mut copy = game.board();
        for square in copy.iter_mut() {
            *square = Square::Occupied(Mark::O);
        }
        prop_assert_eq!(game.board(), before);
    }

    #[test]
    fn prop_turns_alternate(moves in prop::collection::vec(0usize..12, 1..30)) {
        let mut game = TurnController::new();
        game.start_game(Some("Alice"), Some("Bob"));

        for index in moves {
            let mover = game.current_player().map(|p| *p.mark());
            let history_before = game.history().len();
            let outcome = game.play_round(index);
            let accepted = game.history().len() > history_before;

            match (mover, accepted, outcome) {
                (Some(mark), true, None) => {
                    prop_assert_eq!(game.current_player().map(|p| *p.mark()), Some(mark.opponent()));
                }
                (Some(_), true, Some(_)) => prop_assert!(game.is_game_over()),
                (_, false, outcome) => {
                    prop_assert!(outcome.is_none());
                    prop_assert_eq!(game.current_player().map(|p| *p.mark()), mover);
                }
                (None, true, _) => prop_assert!(false, "move accepted after game over"),
            }
        }
    }

    #[test]
    fn prop_win_on_any_line_ends_the_game(line_index in 0usize..8, later in prop::collection::vec(0usize..9, 0..5)) {
        let line = LINES[line_index];
        // Two O replies off the line can never complete a line of their own.
        let o_moves: Vec<usize> = (0..9).filter(|i| !line.contains(i)).take(2).collect();

        let mut game = TurnController::new();
        game.start_game(Some("Alice"), Some("Bob"));
        prop_assert_eq!(game.play_round(line[0]), None);
        prop_assert_eq!(game.play_round(o_moves[0]), None);
        prop_assert_eq!(game.play_round(line[1]), None);
        prop_assert_eq!(game.play_round(o_moves[1]), None);
        let outcome = game.play_round(line[2]);
        prop_assert_eq!(outcome.map(|o| o.to_string()), Some("Alice wins!".to_string()));

        let frozen = game.board();
        for index in later {
            prop_assert_eq!(game.play_round(index), None);
        }
        prop_assert_eq!(game.board(), frozen);
    }
}
