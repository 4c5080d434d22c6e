//! Core value types: coordinates, directions, pegs, slots, configuration, errors.
//!
//! These are shared by the board, the history log, and the command layer.

pub mod coord;
pub mod peg;
pub mod config;
pub mod errors;

pub use coord::{Coord, Direction};
pub use peg::{PegId, Slot};
pub use config::{GameConfig, DEFAULT_HISTORY_CAPACITY};
pub use errors::{HistoryError, ParseCommandError};
