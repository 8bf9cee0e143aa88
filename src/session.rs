//! A local game session: one controller, the configured names, and the
//! last status to show.

use crate::config::Settings;
use crate::status;
use tictactoe_engine::{Outcome, TurnController};
use tracing::{debug, info, instrument};

/// Front-end state around a [`TurnController`].
#[derive(Debug, Clone)]
pub struct GameSession {
    game: TurnController,
    settings: Settings,
    last_outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session and starts the first game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let mut session = Self {
            game: TurnController::new(),
            settings,
            last_outcome: None,
        };
        session.restart();
        session
    }

    /// Starts a new game with the configured names and replays any seed moves.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.start_game(
            self.settings.player_x().as_deref(),
            self.settings.player_o().as_deref(),
        );
        self.last_outcome = None;

        for &index in self.settings.seed() {
            if self.game.is_game_over() {
                debug!(index, "Seed move skipped, game already over");
                continue;
            }
            self.last_outcome = self.game.play_round(index);
        }
        if !self.settings.seed().is_empty() {
            info!(moves = self.settings.seed().len(), "Seed moves applied");
        }
    }

    /// Plays one round at `index` (0-8).
    ///
    /// Returns the outcome when the game ended; ignored moves return `None`
    /// and leave the previous status in place.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Option<&Outcome> {
        if let Some(outcome) = self.game.play_round(index) {
            self.last_outcome = Some(outcome);
            return self.last_outcome.as_ref();
        }
        None
    }

    /// The underlying controller.
    pub fn game(&self) -> &TurnController {
        &self.game
    }

    /// Settings the session was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current status line.
    pub fn status(&self) -> String {
        status::status_line(&self.game, self.last_outcome.as_ref())
    }

    /// Current status line, with `hint` appended once the game is over.
    pub fn status_with_hint(&self, hint: &str) -> String {
        status::status_with_hint(&self.game, self.last_outcome.as_ref(), hint)
    }
}
