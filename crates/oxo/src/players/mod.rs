//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, InputClosed};

use crate::session::GameSession;
use anyhow::Result;
use oxo_core::Position;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses the next move for the side on turn.
    async fn choose(&mut self, session: &GameSession) -> Result<Position>;

    /// Asks whether to play another game. Players without an opinion agree.
    async fn wants_rematch(&mut self) -> Result<bool> {
        Ok(true)
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
