//! Peg identification and slot contents.
//!
//! ## ID Layout
//!
//! Pegs are numbered once, at board construction, in row-major scan order
//! starting from 1. An id is never reassigned: a captured peg's id simply
//! stops appearing on the board. `PegId(0)` is never handed out, so looking it
//! up always fails.
//!
//! ```
//! use peg_solitaire::core::{PegId, Slot};
//!
//! let slot = Slot::Occupied(PegId::new(7));
//! assert_eq!(slot.peg(), Some(PegId::new(7)));
//! assert!(slot.is_playable());
//! assert!(!Slot::OffBoard.is_playable());
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier of a peg for the life of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PegId(pub u32);

impl PegId {
    /// The first id handed out on a fresh board.
    pub const FIRST: PegId = PegId(1);

    /// Create a peg ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one in allocation order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for PegId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg({})", self.0)
    }
}

/// One cell of the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Not part of the playable topology.
    OffBoard,
    /// Playable, no peg.
    Empty,
    /// Playable, holding a peg.
    Occupied(PegId),
}

impl Slot {
    /// Part of the playable topology (empty or occupied).
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Slot::OffBoard)
    }

    /// Playable and without a peg.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// The peg in this slot, if any.
    #[must_use]
    pub const fn peg(self) -> Option<PegId> {
        match self {
            Slot::Occupied(id) => Some(id),
            _ => None,
        }
    }
}
