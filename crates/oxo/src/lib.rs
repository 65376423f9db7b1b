//! Oxo - tic-tac-toe against a computer opponent
//!
//! The application layer around [`oxo_core`]: it owns the board for each
//! game, drives turns between a human and the computer, and keeps
//! win/loss/draw statistics per difficulty tier.
//!
//! # Architecture
//!
//! - **Session**: one game's authoritative state and move legality
//! - **Players**: the human (text input) and the computer (difficulty tier)
//! - **Orchestrator**: the turn loop, emitting events for the UI
//! - **Stats**: per-tier counters behind a pluggable store
//! - **Config**: TOML settings
//!
//! # Example
//!
//! ```
//! use oxo::{FirstPlayer, GameOutcome, GameSession, MemoryStore, StatsService};
//! use oxo_core::{Difficulty, ScriptedSource};
//!
//! let mut session = GameSession::new(Difficulty::Hard, FirstPlayer::Computer);
//! let pos = session.computer_move(&mut ScriptedSource::new(vec![0.0])).unwrap();
//! assert_eq!(pos.to_index(), 4);
//!
//! let stats = StatsService::new(MemoryStore::new());
//! stats.record(Difficulty::Hard, GameOutcome::Draw).unwrap();
//! assert_eq!(*stats.totals().draws(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod render;
mod session;
mod stats;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, FirstPlayer, Settings};

// Crate-level exports - Game session
pub use session::{GameError, GameSession};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, InputClosed, Player};

// Crate-level exports - Rendering
pub use render::{render_event, render_stats};

// Crate-level exports - Statistics
pub use stats::{
    GameOutcome, GameStats, JsonFileStore, MemoryStore, StatsByDifficulty, StatsError,
    StatsService, StatsStore,
};
