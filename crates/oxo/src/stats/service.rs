//! Statistics business logic layer.

use crate::stats::{GameOutcome, GameStats, StatsByDifficulty, StatsError, StatsStore};
use oxo_core::Difficulty;
use tracing::{debug, info, instrument};

/// Service layer over a [`StatsStore`].
///
/// Every update is a load-modify-save round trip, so the store stays the
/// single source of truth.
#[derive(Debug)]
pub struct StatsService {
    store: Box<dyn StatsStore>,
}

impl StatsService {
    /// Creates a service backed by the given store.
    #[instrument(skip(store))]
    pub fn new(store: impl StatsStore + 'static) -> Self {
        info!("Creating StatsService");
        Self {
            store: Box::new(store),
        }
    }

    /// Current statistics for every tier.
    #[instrument(skip(self))]
    pub fn stats(&self) -> StatsByDifficulty {
        self.store.load()
    }

    /// Statistics summed over all tiers.
    #[instrument(skip(self))]
    pub fn totals(&self) -> GameStats {
        self.store.load().total()
    }

    /// Records one finished game and returns the updated statistics.
    #[instrument(skip(self))]
    pub fn record(
        &self,
        difficulty: Difficulty,
        outcome: GameOutcome,
    ) -> Result<StatsByDifficulty, StatsError> {
        debug!("Recording game result");
        let mut stats = self.store.load();
        stats.record(difficulty, outcome);
        self.store.save(&stats)?;

        let tier = stats.get(difficulty);
        info!(
            %difficulty,
            %outcome,
            games = *tier.games_played(),
            win_rate = %format!("{:.1}%", tier.win_rate()),
            "Game result recorded"
        );
        Ok(stats)
    }

    /// Zeroes all statistics.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), StatsError> {
        self.store.reset()?;
        info!("Stats reset");
        Ok(())
    }
}
