//! End-to-end game scenarios.

use tictactoe_engine::{
    GameStatus, Mark, MoveError, Outcome, Position, Square, TurnController,
    invariants::{InvariantSet, TicTacToeInvariants},
};

fn play_all(game: &mut TurnController, moves: &[usize]) -> Vec<Option<Outcome>> {
    moves.iter().map(|&index| game.play_round(index)).collect()
}

#[test]
fn test_alice_wins_on_diagonal() {
    let mut game = TurnController::new();
    game.start_game(Some("Alice"), Some("Bob"));

    let results = play_all(&mut game, &[0, 1, 4, 2, 8]);

    assert!(results[..4].iter().all(Option::is_none));
    let outcome = results[4].clone().expect("diagonal completes");
    assert_eq!(outcome.to_string(), "Alice wins!");

    let board = game.board();
    for index in [0, 4, 8] {
        assert_eq!(board[index], Square::Occupied(Mark::X));
    }
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let mut game = TurnController::new();
    game.start_game(Some("P1"), Some("P2"));

    let results = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(results[..8].iter().all(Option::is_none));
    assert_eq!(results[8], Some(Outcome::Tie));
    assert_eq!(results[8].as_ref().map(ToString::to_string).as_deref(), Some("It's a tie!"));
    assert!(game.board().iter().all(|s| !s.is_empty()));
    assert!(TicTacToeInvariants::check_all(&game).is_ok());
}

#[test]
fn test_o_can_win() {
    let mut game = TurnController::new();
    game.start_game(Some("Xavier"), Some("Olga"));

    let results = play_all(&mut game, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(
        results[5].as_ref().map(ToString::to_string).as_deref(),
        Some("Olga wins!")
    );
    assert_eq!(game.status(), GameStatus::Won(Mark::O));
}

#[test]
fn test_new_game_after_finished_one() {
    let mut game = TurnController::new();
    game.start_game(Some("Alice"), Some("Bob"));
    play_all(&mut game, &[0, 1, 4, 2, 8]);
    assert!(game.is_game_over());

    // Bob moved second last time; seated first now, Bob plays X.
    game.start_game(Some("Bob"), Some("Alice"));

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board(), [Square::Empty; 9]);
    let current = game.current_player().expect("game restarted");
    assert_eq!(current.name(), "Bob");
    assert_eq!(*current.mark(), Mark::X);

    assert_eq!(game.play_round(0), None);
    assert_eq!(game.board()[0], Square::Occupied(Mark::X));
}

#[test]
fn test_blank_names_get_defaults() {
    let mut game = TurnController::new();
    game.start_game(Some("   "), None);

    let players = game.players().expect("game started");
    assert_eq!(players[0].name(), "Player 1");
    assert_eq!(players[1].name(), "Player 2");

    let outcome = play_all(&mut game, &[6, 0, 7, 1, 8]).pop().flatten();
    assert_eq!(outcome.map(|o| o.to_string()).as_deref(), Some("Player 1 wins!"));
}

#[test]
fn test_isolated_games_do_not_interfere() {
    let mut first = TurnController::new();
    let mut second = TurnController::new();
    first.start_game(Some("A"), Some("B"));
    second.start_game(Some("C"), Some("D"));

    first.play_round(4);

    assert_eq!(second.board(), [Square::Empty; 9]);
    assert_eq!(second.current_player().map(|p| p.name().as_str()), Some("C"));
    assert_eq!(first.current_player().map(|p| p.name().as_str()), Some("B"));
}

#[test]
fn test_rejections_are_explained() {
    let mut game = TurnController::new();
    assert_eq!(game.make_move(0), Err(MoveError::NotStarted));

    game.start_game(None, None);
    game.play_round(0);
    let err = game.make_move(0).unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied(Position::TopLeft));
    assert_eq!(err.to_string(), "Square Top-left is already occupied");
    assert_eq!(
        game.make_move(11).unwrap_err().to_string(),
        "Position 11 is out of bounds (must be 0-8)"
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = TurnController::new();
    game.start_game(Some("Alice"), Some("Bob"));
    game.play_round(4);

    let json = serde_json::to_value(game.snapshot()).expect("snapshot serializes");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["current"]["name"], "Bob");
    assert_eq!(json["board"][4]["Occupied"], "X");
    assert_eq!(json["history"][0]["position"], "Center");
}
