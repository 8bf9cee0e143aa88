//! Application state and logic.

use super::input::{self, Action};
use crate::session::GameSession;
use crossterm::event::KeyCode;
use tictactoe_engine::Position;
use tracing::debug;

const RESTART_HINT: &str = "Press 'r' to restart or 'q' to quit.";

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates a new application around a started session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        self.session.status_with_hint(RESTART_HINT)
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = input::action_for(key, self.cursor);
        debug!(?key, ?action, "Key pressed");

        match action {
            Action::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::Activate => self.play(self.cursor),
            Action::MoveCursor(position) => self.cursor = position,
            Action::Restart => self.restart(),
            Action::Quit => self.running = false,
            Action::None => {}
        }
    }

    fn play(&mut self, position: Position) {
        if self.session.game().is_game_over() {
            debug!("Game over, input ignored");
            return;
        }
        self.session.play(position.to_index());
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.cursor = Position::Center;
    }
}
