//! Human player fed by lines of text input.

use super::Player;
use crate::orchestrator::GameEvent;
use crate::session::GameSession;
use anyhow::Result;
use oxo_core::Position;
use derive_more::{Display, Error};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// The human's input ended before they chose a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Input closed before a move was chosen")]
pub struct InputClosed;

/// Human player reading moves from a channel of input lines.
///
/// Accepts cell numbers `1`-`9` or position labels such as `center`.
/// Unrecognized input is reported through the event channel and the
/// player waits for the next line.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input_rx: mpsc::UnboundedReceiver<String>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
            event_tx,
        }
    }

    async fn next_line(&mut self) -> Result<String> {
        self.input_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::Error::new(InputClosed))
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, _session), fields(player = %self.name))]
    async fn choose(&mut self, _session: &GameSession) -> Result<Position> {
        loop {
            let line = self.next_line().await?;
            match Position::from_label_or_number(&line) {
                Some(pos) => {
                    debug!(%pos, "Human chose position");
                    return Ok(pos);
                }
                None => {
                    debug!(input = %line.trim(), "Unrecognized input");
                    self.event_tx.send(GameEvent::InvalidInput(line.trim().to_string()))?;
                }
            }
        }
    }

    #[instrument(skip(self), fields(player = %self.name))]
    async fn wants_rematch(&mut self) -> Result<bool> {
        // End of input means no more games
        while let Some(line) = self.input_rx.recv().await {
            match line.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" | "q" | "quit" => return Ok(false),
                _ => {
                    self.event_tx.send(GameEvent::RematchPrompt)?;
                }
            }
        }
        Ok(false)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
