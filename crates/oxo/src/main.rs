//! Oxo - Unified CLI
//!
//! Terminal tic-tac-toe against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use oxo::{
    ComputerPlayer, FirstPlayer, GameEvent, GameSession, HumanPlayer, JsonFileStore,
    Orchestrator, Settings, StatsService, render_event, render_stats,
};
use oxo_core::RngSource;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.stats_path {
        settings = settings.with_stats_path(path);
    }
    debug!(?settings, "Settings resolved");

    let stats = StatsService::new(JsonFileStore::new(settings.stats_path()));

    match cli.command {
        Command::Play {
            difficulty,
            computer_first,
            seed,
            think_ms,
        } => {
            if let Some(difficulty) = difficulty {
                settings = settings.with_difficulty(difficulty);
            }
            if computer_first {
                settings = settings.with_first_player(FirstPlayer::Computer);
            }
            if let Some(ms) = think_ms {
                settings = settings.with_think_delay_ms(ms);
            }
            run_play(settings, stats, seed).await
        }
        Command::Stats => {
            println!("{}", render_stats(&stats.stats()));
            Ok(())
        }
        Command::ResetStats => {
            stats.reset()?;
            println!("Statistics reset.");
            Ok(())
        }
    }
}

/// Play games until the human declines a rematch or input ends.
#[instrument(skip(stats))]
async fn run_play(settings: Settings, stats: StatsService, seed: Option<u64>) -> Result<()> {
    info!("Starting terminal game");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    // Forward stdin lines to the human player. A plain thread, since a
    // blocking read inside the runtime would hold up shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin closed");
    });

    // Render events in order on stdout
    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let text = render_event(&event);
            match event {
                GameEvent::AwaitingHuman | GameEvent::RematchPrompt => print!("{}", text),
                _ => println!("{}", text),
            }
            std::io::stdout().flush().ok();
        }
    });

    let source = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let session = GameSession::new(*settings.difficulty(), *settings.first_player());
    let human = HumanPlayer::new("You", input_rx, event_tx.clone());
    let computer = ComputerPlayer::new("Computer", source, settings.think_delay());
    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(human),
        Box::new(computer),
        stats,
        event_tx,
    );

    let result = orchestrator.play().await;

    // Closing every sender lets the renderer drain and stop
    drop(orchestrator);
    renderer.await?;
    println!();
    result
}
