//! Bounded undo/redo history.
//!
//! [`HistoryLog`] keeps a fixed ring of board snapshots and a
//! [`HistoryCursor`] of three indices into it. Capacity is chosen once;
//! when the ring is full the oldest undo step is silently dropped.
//!
//! ## Example Usage
//!
//! ```
//! use peg_solitaire::{Board, HistoryLog, Origin};
//! use peg_solitaire::core::Coord;
//!
//! let mut board = Board::english();
//! let mut history = HistoryLog::new(16, &board).unwrap();
//!
//! board.execute_move(Coord::new(3, 3), Origin::At(Coord::new(1, 3)));
//! history.commit(&board);
//!
//! assert!(history.undo(&mut board));
//! assert_eq!(board.score(), 32);
//! assert!(history.redo(&mut board));
//! assert_eq!(board.score(), 31);
//! ```

mod cursor;
mod log;

pub use cursor::HistoryCursor;
pub use log::HistoryLog;
