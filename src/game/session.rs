//! One game: a board plus its undo history, driven by commands.

use crate::board::{Board, JumpMove};
use crate::command::Command;
use crate::core::{GameConfig, HistoryError, ParseCommandError};
use crate::history::HistoryLog;

/// What applying a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The jump was executed and committed.
    Moved(JumpMove),
    /// The move request was not a legal jump; nothing changed.
    IllegalMove,
    Undone,
    NothingToUndo,
    Redone,
    NothingToRedo,
    /// The front end should show its help text.
    Help,
    /// The front end should end the session.
    Quit,
}

/// A board and its history, mutated only through commands.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    history: HistoryLog,
}

impl GameSession {
    /// Start a game on a fresh English board.
    pub fn new(config: &GameConfig) -> Result<Self, HistoryError> {
        let board = Board::english();
        let history = HistoryLog::new(config.history_capacity, &board)?;
        Ok(Self { board, history })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Pegs remaining.
    #[must_use]
    pub fn score(&self) -> usize {
        self.board.score()
    }

    /// No legal jump remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.board.move_possible()
    }

    /// Apply one command. Legal moves are committed immediately.
    pub fn apply(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Move(request) => {
                let Some(dest) = request.destination(&self.board) else {
                    return Outcome::IllegalMove;
                };
                match self.board.apply_move(dest, request.origin) {
                    Some(mv) => {
                        self.history.commit(&self.board);
                        Outcome::Moved(mv)
                    }
                    None => Outcome::IllegalMove,
                }
            }
            Command::Undo => {
                if self.history.undo(&mut self.board) {
                    Outcome::Undone
                } else {
                    Outcome::NothingToUndo
                }
            }
            Command::Redo => {
                if self.history.redo(&mut self.board) {
                    Outcome::Redone
                } else {
                    Outcome::NothingToRedo
                }
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }

    /// Parse and apply one line of input.
    pub fn apply_str(&mut self, line: &str) -> Result<Outcome, ParseCommandError> {
        let command: Command = line.parse()?;
        Ok(self.apply(&command))
    }

    /// Walk the redo entries ahead of the current position.
    pub fn replay<F>(&mut self, observer: F) -> usize
    where
        F: FnMut(&Board),
    {
        self.history.replay(&mut self.board, observer)
    }

    /// Walk the whole retained history from the oldest entry.
    pub fn replay_all<F>(&mut self, observer: F) -> usize
    where
        F: FnMut(&Board),
    {
        self.history.replay_all(&mut self.board, observer)
    }
}
