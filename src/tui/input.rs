//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell directly (digit keys).
    Play(Position),
    /// Move the cursor to this cell.
    MoveCursor(Position),
    /// Play the cell under the cursor (Enter / Space).
    Activate,
    /// Start a new game.
    Restart,
    /// Leave the TUI.
    Quit,
    /// Nothing to do.
    None,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Position::from_index(digit as usize - 1)
                .map(Action::Play)
                .unwrap_or(Action::None),
            _ => Action::None,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_arrows_stop_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_key_actions() {
        let cursor = Position::Center;
        assert_eq!(action_for(KeyCode::Char('1'), cursor), Action::Play(Position::TopLeft));
        assert_eq!(action_for(KeyCode::Char('9'), cursor), Action::Play(Position::BottomRight));
        assert_eq!(action_for(KeyCode::Char('0'), cursor), Action::None);
        assert_eq!(action_for(KeyCode::Enter, cursor), Action::Activate);
        assert_eq!(action_for(KeyCode::Char(' '), cursor), Action::Activate);
        assert_eq!(action_for(KeyCode::Char('r'), cursor), Action::Restart);
        assert_eq!(action_for(KeyCode::Esc, cursor), Action::Quit);
        assert_eq!(
            action_for(KeyCode::Right, cursor),
            Action::MoveCursor(Position::MiddleRight)
        );
    }
}
