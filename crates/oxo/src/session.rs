//! A single game between the human and the computer.
//!
//! The session owns the authoritative board and enforces the move
//! legality that the rules engine leaves to its caller: whose turn it is,
//! whether the square is free, and whether the game is already over.

use crate::config::FirstPlayer;
use crate::stats::GameOutcome;
use derive_more::{Display, Error};
use oxo_core::{Board, Difficulty, Mark, Outcome, Position, RandomSource, evaluate, winning_line};
use tracing::{debug, info, instrument};

/// Error applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// The move was made by the side not on turn.
    #[display("It is {}'s turn, not {}'s", expected, attempted)]
    NotYourTurn {
        /// Mark on turn.
        expected: Mark,
        /// Mark that tried to move.
        attempted: Mark,
    },
    /// The target square already holds a mark.
    #[display("{} is already taken", position)]
    Occupied {
        /// The occupied square.
        position: Position,
    },
    /// The computer's policy found no move.
    #[display("No legal move available")]
    NoLegalMove,
}

/// State of one game against the computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    human: Mark,
    to_move: Mark,
    history: Vec<Position>,
}

impl GameSession {
    /// Starts a game on an empty board. X always moves first.
    #[instrument]
    pub fn new(difficulty: Difficulty, first_player: FirstPlayer) -> Self {
        let human = first_player.human_mark();
        info!(%difficulty, %human, "Starting game");
        Self {
            board: Board::new(),
            difficulty,
            human,
            to_move: Mark::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the computer's difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human.opponent()
    }

    /// Mark on turn, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        (!self.outcome().is_over()).then_some(self.to_move)
    }

    /// True when the game is in progress and the human is on turn.
    pub fn is_human_turn(&self) -> bool {
        self.to_move() == Some(self.human)
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// The completed line, once someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board)
    }

    /// Result from the human's side, once the game is over.
    pub fn human_result(&self) -> Option<GameOutcome> {
        GameOutcome::for_human(self.outcome(), self.human)
    }

    /// Places `mark` at `position` and returns the resulting outcome.
    #[instrument(skip(self))]
    pub fn apply(&mut self, position: Position, mark: Mark) -> Result<Outcome, GameError> {
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }
        if mark != self.to_move {
            return Err(GameError::NotYourTurn {
                expected: self.to_move,
                attempted: mark,
            });
        }
        if !self.board.is_empty(position) {
            return Err(GameError::Occupied { position });
        }

        self.board = self.board.with_mark(position, mark);
        self.history.push(position);
        self.to_move = mark.opponent();

        let outcome = self.outcome();
        debug!(?outcome, moves = self.history.len(), "Move applied");
        Ok(outcome)
    }

    /// Asks the difficulty tier for the computer's next move without
    /// playing it.
    #[instrument(skip(self, source))]
    pub fn computer_choice<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Position, GameError> {
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }
        self.difficulty
            .select_move(&self.board, self.computer_mark(), source)
            .ok_or(GameError::NoLegalMove)
    }

    /// Chooses and plays the computer's move.
    #[instrument(skip(self, source))]
    pub fn computer_move<S: RandomSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Position, GameError> {
        let position = self.computer_choice(source)?;
        self.apply(position, self.computer_mark())?;
        Ok(position)
    }

    /// Clears the board for a new game with the same settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.history.clear();
    }
}
