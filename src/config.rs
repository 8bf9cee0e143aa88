//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings shared by both front-ends.
///
/// Layered as defaults, then the TOML file, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the player holding X (moves first).
    #[serde(default)]
    player_x: Option<String>,

    /// Name of the player holding O.
    #[serde(default)]
    player_o: Option<String>,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Cell indices (0-8) pre-played after each start, for demos.
    #[serde(default)]
    seed: Vec<usize>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            log_file: default_log_file(),
            seed: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, or defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads settings from a TOML file that must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;

        info!(?settings, "Config loaded successfully");
        Ok(settings)
    }

    /// Applies command-line values on top of these settings.
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        seed: Option<Vec<usize>>,
    ) -> Result<Self, ConfigError> {
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.seed.iter().find(|&&index| index > 8) {
            Some(index) => Err(ConfigError::new(format!(
                "Seed move {} is out of range (must be 0-8)",
                index
            ))),
            None => Ok(()),
        }
    }
}

/// Parses a comma-separated list of cell indices, e.g. `"0,4,8"`.
pub fn parse_seed(s: &str) -> Result<Vec<usize>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|e| ConfigError::new(format!("Invalid seed move '{}': {}", part, e)))
        })
        .collect()
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
