//! The peg solitaire board.
//!
//! ## Rules
//!
//! A move jumps one peg two slots orthogonally over an occupied neighbour
//! into an empty slot; the neighbour is captured. A move names its peg
//! either by id or by coordinates (see [`Origin`]).
//!
//! ## Example Usage
//!
//! ```
//! use peg_solitaire::board::{Board, Origin};
//! use peg_solitaire::core::{Coord, Slot};
//!
//! let mut board = Board::english();
//! assert!(board.execute_move(Coord::new(3, 3), Origin::At(Coord::new(1, 3))));
//! assert_eq!(board.score(), 31);
//! assert_eq!(board.slot(Coord::new(2, 3)), Slot::Empty);
//! ```

mod grid;
mod layout;
mod moves;
mod render;
mod snapshot;

pub use grid::{Board, MoveList};
pub use moves::{JumpMove, Origin};
pub use snapshot::Snapshot;
