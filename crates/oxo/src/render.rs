//! Plain-text rendering of game events and statistics.

use crate::orchestrator::GameEvent;
use crate::stats::{GameOutcome, GameStats, StatsByDifficulty};
use oxo_core::{Difficulty, Outcome};

/// Renders one event as terminal text.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted { difficulty, human } => format!(
            "New game on {}. You play {}.",
            difficulty.label(),
            human
        ),
        GameEvent::BoardChanged(board) => format!("\n{}\n", board),
        GameEvent::AwaitingHuman => "Your move (1-9): ".to_string(),
        GameEvent::ComputerThinking => "Computer is thinking...".to_string(),
        GameEvent::MoveMade {
            player,
            mark,
            position,
        } => format!("{} ({}) plays {}", player, mark, position),
        GameEvent::InvalidInput(input) => format!("'{}' is not a move. Try 1-9.", input),
        GameEvent::IllegalMove(reason) => format!("{}. Try again.", reason),
        GameEvent::GameOver {
            outcome,
            result,
            winning_line,
            stats,
        } => {
            let headline = match (outcome, result) {
                (Outcome::Draw, _) => "It's a draw!".to_string(),
                (Outcome::Won(mark), GameOutcome::Win) => format!("{} wins. You win!", mark),
                (Outcome::Won(mark), _) => format!("{} wins. The computer wins.", mark),
                (Outcome::InProgress, _) => "Game abandoned.".to_string(),
            };
            let line = winning_line
                .map(|cells| {
                    let numbers: Vec<String> =
                        cells.iter().map(|p| (p.to_index() + 1).to_string()).collect();
                    format!(" Line: {}.", numbers.join("-"))
                })
                .unwrap_or_default();
            format!("{}{}\n\n{}", headline, line, render_stats(stats))
        }
        GameEvent::RematchPrompt => "Play again? [Y/n]: ".to_string(),
    }
}

fn render_row(label: &str, stats: &GameStats) -> String {
    format!(
        "{:<8} {:>4}W {:>4}L {:>4}D {:>5} played {:>4.0}% win rate",
        label,
        stats.wins(),
        stats.losses(),
        stats.draws(),
        stats.games_played(),
        stats.win_rate()
    )
}

/// Renders a per-tier table followed by the overall totals.
pub fn render_stats(stats: &StatsByDifficulty) -> String {
    let mut lines: Vec<String> = Difficulty::ALL
        .iter()
        .map(|&d| render_row(d.label(), stats.get(d)))
        .collect();
    lines.push(render_row("Overall", &stats.total()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_core::{Mark, Position};

    #[test]
    fn test_render_stats_rows() {
        let mut stats = StatsByDifficulty::default();
        stats.record(Difficulty::Hard, GameOutcome::Win);
        stats.record(Difficulty::Hard, GameOutcome::Loss);
        let text = render_stats(&stats);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Easy"));
        assert!(lines[2].starts_with("Hard"));
        assert!(lines[2].contains("50% win rate"));
        assert!(lines[3].starts_with("Overall"));
        assert!(lines[3].contains("2 played"));
    }

    #[test]
    fn test_render_game_over_with_line() {
        let event = GameEvent::GameOver {
            outcome: Outcome::Won(Mark::O),
            result: GameOutcome::Loss,
            winning_line: Some([Position::TopRight, Position::Center, Position::BottomLeft]),
            stats: StatsByDifficulty::default(),
        };
        let text = render_event(&event);
        assert!(text.starts_with("O wins. The computer wins. Line: 3-5-7."));
    }

    #[test]
    fn test_render_move() {
        let event = GameEvent::MoveMade {
            player: "You".to_string(),
            mark: Mark::X,
            position: Position::Center,
        };
        assert_eq!(render_event(&event), "You (X) plays Center");
    }
}
