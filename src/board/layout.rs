//! Starting topology of the board.
//!
//! ## Mask Encoding
//!
//! ```text
//! ' '  off board
//! '.'  playable, starts empty
//! 'o'  playable, starts with a peg
//! ```

use im::Vector;

use crate::core::{PegId, Slot};

/// A rectangular starting mask.
pub(crate) struct Layout {
    rows: &'static [&'static str],
}

impl Layout {
    /// The 33-hole English cross with the centre hole empty.
    pub(crate) const ENGLISH: Layout = Layout {
        rows: &[
            "  ooo  ",
            "  ooo  ",
            "ooooooo",
            "ooo.ooo",
            "ooooooo",
            "  ooo  ",
            "  ooo  ",
        ],
    };

    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Expand the mask into row-major slots, numbering pegs from 1 in scan order.
    pub(crate) fn populate(&self) -> Vector<Slot> {
        let mut next = PegId::FIRST;
        let mut cells = Vector::new();

        for row in self.rows {
            debug_assert_eq!(row.len(), self.width(), "layout rows must be equal width");
            for mark in row.bytes() {
                let slot = match mark {
                    b'o' => {
                        let id = next;
                        next = next.next();
                        Slot::Occupied(id)
                    }
                    b'.' => Slot::Empty,
                    _ => Slot::OffBoard,
                };
                cells.push_back(slot);
            }
        }

        cells
    }
}
