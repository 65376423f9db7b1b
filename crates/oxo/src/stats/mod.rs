//! Win/loss/draw statistics per difficulty tier.

mod error;
mod models;
mod service;
mod store;

pub use error::StatsError;
pub use models::{GameOutcome, GameStats, StatsByDifficulty};
pub use service::StatsService;
pub use store::{JsonFileStore, MemoryStore, StatsStore};
