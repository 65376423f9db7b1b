//! Game orchestration between the human and the computer.

use crate::players::{InputClosed, Player};
use crate::session::GameSession;
use crate::stats::{GameOutcome, StatsByDifficulty, StatsService};
use anyhow::Result;
use oxo_core::{Difficulty, Mark, Outcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new game started.
    GameStarted {
        /// Computer's difficulty tier.
        difficulty: Difficulty,
        /// Mark played by the human.
        human: Mark,
    },
    /// Board updated (rendered text).
    BoardChanged(String),
    /// The human is on turn.
    AwaitingHuman,
    /// The computer is thinking.
    ComputerThinking,
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// Input could not be read as a move or answer.
    InvalidInput(String),
    /// A move was rejected by the session.
    IllegalMove(String),
    /// Game ended.
    GameOver {
        /// Final board outcome.
        outcome: Outcome,
        /// Result from the human's side.
        result: GameOutcome,
        /// The completed line, when someone won.
        winning_line: Option<[Position; 3]>,
        /// Statistics after recording this game.
        stats: StatsByDifficulty,
    },
    /// Asking whether to play again.
    RematchPrompt,
}

/// Orchestrates gameplay between a human and a computer player.
pub struct Orchestrator {
    session: GameSession,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    stats: StatsService,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        stats: StatsService,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            computer,
            stats,
            event_tx,
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs one game to completion and records its result.
    #[instrument(skip(self), fields(difficulty = %self.session.difficulty()))]
    pub async fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::GameStarted {
            difficulty: self.session.difficulty(),
            human: self.session.human_mark(),
        })?;
        self.event_tx
            .send(GameEvent::BoardChanged(self.session.board().display()))?;

        loop {
            let Some(mark) = self.session.to_move() else {
                return self.finish();
            };

            let is_human = mark == self.session.human_mark();
            let player = if is_human {
                self.event_tx.send(GameEvent::AwaitingHuman)?;
                &mut self.human
            } else {
                self.event_tx.send(GameEvent::ComputerThinking)?;
                &mut self.computer
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.choose(&self.session).await?;

            match self.session.apply(position, mark) {
                Ok(_) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player.name().to_string(),
                        mark,
                        position,
                    })?;
                    self.event_tx
                        .send(GameEvent::BoardChanged(self.session.board().display()))?;
                }
                Err(e) if is_human => {
                    warn!(error = %e, "Rejected human move");
                    self.event_tx.send(GameEvent::IllegalMove(e.to_string()))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn finish(&mut self) -> Result<GameOutcome> {
        let outcome = self.session.outcome();
        let result = self
            .session
            .human_result()
            .ok_or_else(|| anyhow::anyhow!("Game finished without a result"))?;

        let stats = self.stats.record(self.session.difficulty(), result)?;
        info!(?outcome, %result, moves = self.session.history().len(), "Game over");

        self.event_tx.send(GameEvent::GameOver {
            outcome,
            result,
            winning_line: self.session.winning_line(),
            stats,
        })?;
        Ok(result)
    }

    /// Asks the human whether to play again.
    #[instrument(skip(self))]
    pub async fn ask_rematch(&mut self) -> Result<bool> {
        self.event_tx.send(GameEvent::RematchPrompt)?;
        self.human.wants_rematch().await
    }

    /// Restarts the game with the same settings.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    /// Plays games until the human declines a rematch.
    ///
    /// Input ending mid-game abandons that game without recording it.
    #[instrument(skip(self))]
    pub async fn play(&mut self) -> Result<()> {
        loop {
            match self.run().await {
                Ok(_) => {}
                Err(e) if e.is::<InputClosed>() => {
                    info!(moves = self.session.history().len(), "Game abandoned");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
            if !self.ask_rematch().await? {
                return Ok(());
            }
            self.restart();
        }
    }
}
