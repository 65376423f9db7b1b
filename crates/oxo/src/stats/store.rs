//! Persistence port for statistics and its implementations.

use crate::stats::{StatsByDifficulty, StatsError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// Durable storage for [`StatsByDifficulty`].
///
/// Loading never fails: stored data that is missing or unreadable reads
/// as the zeroed baseline.
pub trait StatsStore: Send + Sync + std::fmt::Debug {
    /// Loads the stored statistics, or zeros when there are none.
    fn load(&self) -> StatsByDifficulty;

    /// Replaces the stored statistics.
    fn save(&self, stats: &StatsByDifficulty) -> Result<(), StatsError>;

    /// Stores the zeroed baseline.
    fn reset(&self) -> Result<(), StatsError> {
        self.save(&StatsByDifficulty::default())
    }
}

/// Statistics kept as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating JsonFileStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> StatsByDifficulty {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stats file yet");
                return StatsByDifficulty::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stats, starting from zero");
                return StatsByDifficulty::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(stats) => {
                debug!("Stats loaded");
                stats
            }
            Err(e) => {
                warn!(error = %e, "Corrupted stats file, starting from zero");
                StatsByDifficulty::default()
            }
        }
    }

    #[instrument(skip(self, stats), fields(path = %self.path.display()))]
    fn save(&self, stats: &StatsByDifficulty) -> Result<(), StatsError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        // Write beside the target and rename, so a crash never leaves a
        // truncated document in place
        let json = serde_json::to_string_pretty(stats)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        info!(games = *stats.total().games_played(), "Stats saved");
        Ok(())
    }
}

/// Statistics held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stats: Mutex<StatsByDifficulty>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with `stats`.
    pub fn with_stats(stats: StatsByDifficulty) -> Self {
        Self {
            stats: Mutex::new(stats),
        }
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> StatsByDifficulty {
        *self.stats.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn save(&self, stats: &StatsByDifficulty) -> Result<(), StatsError> {
        *self.stats.lock().unwrap_or_else(|e| e.into_inner()) = *stats;
        Ok(())
    }
}
