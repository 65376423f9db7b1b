//! Player-facing settings, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use oxo_core::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file read when no path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "oxo.toml";

/// Which side takes the first move (X) in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human plays X and moves first.
    #[default]
    Human,
    /// The computer plays X and moves first.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Mark the human plays under this setting.
    pub fn human_mark(self) -> Mark {
        match self {
            Self::Human => Mark::X,
            Self::Computer => Mark::O,
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Difficulty tier of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who takes the first move in each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before the computer's move is shown, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Where per-difficulty statistics are stored.
    #[serde(default = "default_stats_path")]
    stats_path: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    600
}

fn default_stats_path() -> PathBuf {
    PathBuf::from("oxo_stats.json")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            first_player: FirstPlayer::default(),
            think_delay_ms: default_think_delay_ms(),
            stats_path: default_stats_path(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when no
    /// path is given.
    ///
    /// A missing default file means defaults. An explicit path must exist
    /// and parse.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Pause before the computer's move is shown.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.think_delay(), Duration::from_millis(600));
        assert_eq!(*settings.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings =
            toml::from_str("difficulty = \"hard\"\nfirst_player = \"computer\"\n").unwrap();
        assert_eq!(*settings.difficulty(), Difficulty::Hard);
        assert_eq!(*settings.first_player(), FirstPlayer::Computer);
        assert_eq!(settings.stats_path(), &PathBuf::from("oxo_stats.json"));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(toml::from_str::<Settings>("difficulty = \"expert\"").is_err());
    }

    #[test]
    fn test_setters_override() {
        let settings = Settings::default()
            .with_difficulty(Difficulty::Easy)
            .with_think_delay_ms(0);
        assert_eq!(*settings.difficulty(), Difficulty::Easy);
        assert_eq!(settings.think_delay(), Duration::ZERO);
    }

    #[test]
    fn test_first_player_marks() {
        assert_eq!(FirstPlayer::Human.human_mark(), Mark::X);
        assert_eq!(FirstPlayer::Computer.human_mark(), Mark::O);
    }
}
