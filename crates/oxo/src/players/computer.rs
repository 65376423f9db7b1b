//! Computer player driven by a difficulty tier.

use super::Player;
use crate::session::GameSession;
use anyhow::Result;
use oxo_core::{Position, RandomSource};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent.
///
/// Waits `think_delay` before answering so the move does not appear
/// instantly. The delay has no bearing on which move is chosen.
pub struct ComputerPlayer<S> {
    name: String,
    source: S,
    think_delay: Duration,
}

impl<S: RandomSource + Send> ComputerPlayer<S> {
    /// Creates a computer player drawing randomness from `source`.
    pub fn new(name: impl Into<String>, source: S, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            source,
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl<S: RandomSource + Send> Player for ComputerPlayer<S> {
    #[instrument(skip(self, session), fields(player = %self.name, difficulty = %session.difficulty()))]
    async fn choose(&mut self, session: &GameSession) -> Result<Position> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let position = session.computer_choice(&mut self.source)?;
        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
