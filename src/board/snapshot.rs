//! Immutable copies of a board's slot grid.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Slot;

/// A deep copy of the full slot grid at one point in time.
///
/// Backed by `im::Vector`, so taking one shares structure with the live board
/// and costs O(1); later moves on the board copy only the chunks they touch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) cells: Vector<Slot>,
}

impl Snapshot {
    /// Number of pegs in the captured grid.
    #[must_use]
    pub fn score(&self) -> usize {
        self.cells.iter().filter(|s| s.is_occupied()).count()
    }
}
