//! Named players.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant: display name plus the mark they place.
///
/// Players are built once per game and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name, never blank.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl Player {
    /// Creates a player, resolving a blank or missing name to the
    /// positional default for `mark`.
    #[instrument]
    pub fn new(name: Option<&str>, mark: Mark) -> Self {
        Self {
            name: resolve_name(name, mark),
            mark,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// Default name for the seat holding `mark`: "Player 1" for X, "Player 2" for O.
pub fn default_name(mark: Mark) -> String {
    format!("Player {}", mark.seat() + 1)
}

/// Trims `name` and falls back to [`default_name`] when nothing is left.
pub fn resolve_name(name: Option<&str>, mark: Mark) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => default_name(mark),
    }
}
