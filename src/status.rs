//! Status line text shared by the front-ends.

use tictactoe_engine::{Outcome, TurnController};

/// Text for the status display after a round.
///
/// The outcome of the last round wins; otherwise whose turn it is.
pub fn status_line(game: &TurnController, last: Option<&Outcome>) -> String {
    if let Some(outcome) = last {
        return outcome.to_string();
    }
    match (game.current_player(), game.winner()) {
        (Some(player), _) => format!("{}'s turn", player.name()),
        (None, Some(winner)) => format!("{} wins!", winner.name()),
        (None, None) if game.is_game_over() => "It's a tie!".to_string(),
        (None, None) => "Press start to play".to_string(),
    }
}

/// Status line with a restart hint once the game is over.
pub fn status_with_hint(game: &TurnController, last: Option<&Outcome>, hint: &str) -> String {
    let status = status_line(game, last);
    if game.is_game_over() {
        format!("{} {}", status, hint)
    } else {
        status
    }
}
