//! Pointer triple of the circular history buffer.
//!
//! ## Layout
//!
//! ```text
//!   capacity = 5, after four commits and one undo:
//!
//!   index:   0     1     2     3     4
//!           [s0]  [s1]  [s2]  [s3]  [s4]
//!            ^oldest     ^current    ^boundary
//!
//!   undo window:  oldest .. current       (s0, s1, s2)
//!   redo window:  current+1 .. boundary   (s3)
//! ```
//!
//! All indices live in `[0, capacity)` and move by single modular steps.
//! The transitions are pure so they can be checked in isolation; only
//! [`HistoryLog`](super::HistoryLog) applies them.

use serde::{Deserialize, Serialize};

/// Positions of the current, boundary, and oldest entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryCursor {
    /// Entry matching the last committed or restored board.
    pub current: usize,
    /// First stale entry past the newest redo entry.
    pub boundary: usize,
    /// Oldest entry still reachable by undo.
    pub oldest: usize,
}

impl HistoryCursor {
    /// Cursor of a fresh log holding only the initial snapshot at index 0.
    #[must_use]
    pub const fn initial(capacity: usize) -> Self {
        Self {
            current: 0,
            boundary: 1 % capacity,
            oldest: 0,
        }
    }

    /// Cursor after recording a new snapshot.
    ///
    /// `current` advances and the redo window collapses. When the advance
    /// lands on `oldest` the buffer is full and the oldest entry is evicted.
    #[must_use]
    pub const fn committed(self, capacity: usize) -> Self {
        let current = (self.current + 1) % capacity;
        let oldest = if current == self.oldest {
            (self.oldest + 1) % capacity
        } else {
            self.oldest
        };
        Self {
            current,
            boundary: (current + 1) % capacity,
            oldest,
        }
    }

    /// Cursor one entry further back, or `None` at the oldest entry.
    #[must_use]
    pub const fn stepped_back(self, capacity: usize) -> Option<Self> {
        if self.current == self.oldest {
            return None;
        }
        Some(Self {
            current: (self.current + capacity - 1) % capacity,
            ..self
        })
    }

    /// Cursor one entry further forward, or `None` at the boundary.
    #[must_use]
    pub const fn stepped_forward(self, capacity: usize) -> Option<Self> {
        let next = (self.current + 1) % capacity;
        if next == self.boundary {
            return None;
        }
        Some(Self {
            current: next,
            ..self
        })
    }

    /// Entries strictly behind `current` that undo can reach.
    #[must_use]
    pub const fn undo_depth(self, capacity: usize) -> usize {
        (self.current + capacity - self.oldest) % capacity
    }

    /// Entries strictly ahead of `current` that redo can reach.
    #[must_use]
    pub const fn redo_depth(self, capacity: usize) -> usize {
        (self.boundary + capacity - self.current - 1) % capacity
    }
}
