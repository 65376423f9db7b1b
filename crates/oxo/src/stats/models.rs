//! Statistics domain types.

use derive_getters::Getters;
use derive_new::new;
use oxo_core::{Difficulty, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game outcome from the human's perspective.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameOutcome {
    /// Human won the game.
    Win,
    /// Human lost the game.
    Loss,
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Reads a finished board outcome from the side playing `human`.
    ///
    /// Returns `None` while the game is still in progress.
    #[instrument]
    pub fn for_human(outcome: Outcome, human: Mark) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(Self::Draw),
            Outcome::Won(mark) if mark == human => Some(Self::Win),
            Outcome::Won(_) => Some(Self::Loss),
        }
    }
}

/// Counters for one difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Games the human won.
    wins: u32,
    /// Games the human lost.
    losses: u32,
    /// Drawn games.
    draws: u32,
    /// All finished games.
    games_played: u32,
}

impl GameStats {
    /// Counts one finished game. Counters stop at `u32::MAX`.
    pub fn record(&mut self, outcome: GameOutcome) {
        let counter = match outcome {
            GameOutcome::Win => &mut self.wins,
            GameOutcome::Loss => &mut self.losses,
            GameOutcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Win rate as a percentage (0.0–100.0).
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games_played as f64) * 100.0
        }
    }

    fn merged(self, other: Self) -> Self {
        Self {
            wins: self.wins.saturating_add(other.wins),
            losses: self.losses.saturating_add(other.losses),
            draws: self.draws.saturating_add(other.draws),
            games_played: self.games_played.saturating_add(other.games_played),
        }
    }
}

/// Counters for every difficulty tier.
///
/// Tiers missing from stored data read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsByDifficulty {
    easy: GameStats,
    medium: GameStats,
    hard: GameStats,
}

impl StatsByDifficulty {
    /// Returns the counters for one tier.
    pub fn get(&self, difficulty: Difficulty) -> &GameStats {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut GameStats {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Counts one finished game against `difficulty`.
    #[instrument(skip(self))]
    pub fn record(&mut self, difficulty: Difficulty, outcome: GameOutcome) {
        self.get_mut(difficulty).record(outcome);
    }

    /// Sums the counters of all tiers.
    pub fn total(&self) -> GameStats {
        Difficulty::ALL
            .iter()
            .fold(GameStats::default(), |acc, &d| acc.merged(*self.get(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_for_human() {
        assert_eq!(GameOutcome::for_human(Outcome::InProgress, Mark::X), None);
        assert_eq!(
            GameOutcome::for_human(Outcome::Won(Mark::X), Mark::X),
            Some(GameOutcome::Win)
        );
        assert_eq!(
            GameOutcome::for_human(Outcome::Won(Mark::X), Mark::O),
            Some(GameOutcome::Loss)
        );
        assert_eq!(
            GameOutcome::for_human(Outcome::Draw, Mark::O),
            Some(GameOutcome::Draw)
        );
    }

    #[test]
    fn test_record_counts_games_played() {
        let mut stats = GameStats::default();
        stats.record(GameOutcome::Win);
        stats.record(GameOutcome::Loss);
        stats.record(GameOutcome::Draw);
        stats.record(GameOutcome::Win);
        assert_eq!(stats, GameStats::new(2, 1, 1, 4));
        assert_eq!(stats.win_rate(), 50.0);
    }

    #[test]
    fn test_win_rate_without_games() {
        assert_eq!(GameStats::default().win_rate(), 0.0);
    }

    #[test]
    fn test_record_only_touches_its_tier() {
        let mut stats = StatsByDifficulty::default();
        stats.record(Difficulty::Hard, GameOutcome::Loss);
        assert_eq!(*stats.get(Difficulty::Hard), GameStats::new(0, 1, 0, 1));
        assert_eq!(*stats.get(Difficulty::Easy), GameStats::default());
        assert_eq!(*stats.get(Difficulty::Medium), GameStats::default());
    }

    #[test]
    fn test_total_sums_tiers() {
        let mut stats = StatsByDifficulty::default();
        stats.record(Difficulty::Easy, GameOutcome::Win);
        stats.record(Difficulty::Easy, GameOutcome::Win);
        stats.record(Difficulty::Medium, GameOutcome::Draw);
        stats.record(Difficulty::Hard, GameOutcome::Loss);
        assert_eq!(stats.total(), GameStats::new(2, 1, 1, 4));
    }

    #[test]
    fn test_json_field_names() {
        let mut stats = StatsByDifficulty::default();
        stats.record(Difficulty::Medium, GameOutcome::Draw);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json["medium"],
            serde_json::json!({ "wins": 0, "losses": 0, "draws": 1, "gamesPlayed": 1 })
        );
    }

    #[test]
    fn test_missing_tier_reads_as_zero() {
        let stats: StatsByDifficulty = serde_json::from_str(
            r#"{ "easy": { "wins": 5, "losses": 3, "draws": 2, "gamesPlayed": 10 } }"#,
        )
        .unwrap();
        assert_eq!(*stats.get(Difficulty::Easy), GameStats::new(5, 3, 2, 10));
        assert_eq!(*stats.get(Difficulty::Hard), GameStats::default());
    }
}
