//! Error types for fallible construction and command parsing.
//!
//! Rule-level outcomes (an illegal jump, nothing left to undo) are not errors
//! and are reported as `bool` or `Option` by the operations themselves.

use thiserror::Error;

/// Errors building a [`HistoryLog`](crate::history::HistoryLog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The circular buffer needs room for at least the initial snapshot.
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

/// Errors turning a line of text into a [`Command`](crate::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// Blank input.
    #[error("empty command")]
    Empty,

    /// A token expected to be a peg id or coordinate was not a number.
    #[error("expected a number, got '{0}'")]
    InvalidNumber(String),

    /// The trailing token of a shortcut move was not a direction.
    #[error("unknown direction '{0}', expected up/down/left/right or u/d/l/r")]
    UnknownDirection(String),

    /// The token count or keyword placement matches no command form.
    #[error("invalid command: \"{0}\"")]
    Malformed(String),
}
