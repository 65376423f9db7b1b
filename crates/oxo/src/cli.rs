//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_core::Difficulty;
use std::path::PathBuf;

/// Oxo - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true, env = "OXO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override where statistics are stored
    #[arg(long, global = true)]
    pub stats_path: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games in the terminal
    Play {
        /// Difficulty tier (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Let the computer take the first move
        #[arg(long)]
        computer_first: bool,

        /// Seed the computer's random choices for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer's move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Show win/loss/draw statistics per difficulty
    Stats,

    /// Reset all statistics to zero
    ResetStats,
}
