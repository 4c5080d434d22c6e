//! # peg-solitaire
//!
//! A single-player peg solitaire engine with bounded undo/redo history.
//!
//! ## Design Principles
//!
//! 1. **Typed Slots**: Every cell is `OffBoard`, `Empty`, or `Occupied(PegId)`.
//!    No numeric sentinels.
//!
//! 2. **Stable Peg Ids**: Pegs are numbered once at construction; captures
//!    retire ids, nothing renumbers.
//!
//! 3. **Rules Never Throw**: An illegal move or an exhausted history is a
//!    `bool`/`Option`, never an error. Only invalid configuration is.
//!
//! ## Architecture
//!
//! - **Snapshots**: The grid is an `im::Vector`, so each history entry is an
//!   O(1) structural-sharing clone of the board.
//!
//! - **Circular History**: A fixed ring of snapshots with three modular
//!   pointers. Full rings evict the oldest undo step.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, peg ids, slots, configuration, errors
//! - `board`: Board topology, move validation and execution, rendering
//! - `history`: Circular undo/redo log
//! - `command`: Text command parsing
//! - `game`: Session combining a board with its history

pub mod core;
pub mod board;
pub mod history;
pub mod command;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, PegId, Slot,
    GameConfig, HistoryError, ParseCommandError,
};

pub use crate::board::{Board, JumpMove, MoveList, Origin, Snapshot};

pub use crate::history::{HistoryCursor, HistoryLog};

pub use crate::command::{Command, MoveRequest, Target};

pub use crate::game::{GameSession, Outcome};
