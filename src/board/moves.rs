//! Move representation: how a move names its peg, and a resolved jump.
//!
//! A caller names the moving peg either by coordinates or by id; the board
//! resolves the id through its peg index. A legal jump is reported as a
//! [`JumpMove`] carrying every coordinate it touched.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PegId};

/// How a move request identifies the peg that moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// The peg with this id, wherever it currently stands.
    Peg(PegId),
    /// Whatever peg stands at these coordinates.
    At(Coord),
}

impl From<PegId> for Origin {
    fn from(peg: PegId) -> Self {
        Origin::Peg(peg)
    }
}

impl From<Coord> for Origin {
    fn from(coord: Coord) -> Self {
        Origin::At(coord)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Peg(peg) => write!(f, "{}", peg),
            Origin::At(coord) => write!(f, "{}", coord),
        }
    }
}

/// A validated jump.
///
/// `over` is the captured slot, always the midpoint of `from` and `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpMove {
    /// The peg that moves; it keeps this id at `to`.
    pub peg: PegId,
    pub from: Coord,
    pub over: Coord,
    pub to: Coord,
}

impl JumpMove {
    /// Check that `over` sits between `from` and `to` on a distance-2 line.
    #[must_use]
    pub fn is_colinear(&self) -> bool {
        self.from.midpoint(self.to) == Some(self.over)
    }
}

impl std::fmt::Display for JumpMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {} over {}", self.peg, self.from, self.to, self.over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_from() {
        assert_eq!(Origin::from(PegId(4)), Origin::Peg(PegId(4)));
        assert_eq!(Origin::from(Coord::new(1, 2)), Origin::At(Coord::new(1, 2)));
    }

    #[test]
    fn test_colinear() {
        let good = JumpMove {
            peg: PegId(2),
            from: Coord::new(1, 3),
            over: Coord::new(2, 3),
            to: Coord::new(3, 3),
        };
        assert!(good.is_colinear());

        let bad = JumpMove { over: Coord::new(2, 2), ..good };
        assert!(!bad.is_colinear());
    }

    #[test]
    fn test_display() {
        let mv = JumpMove {
            peg: PegId(2),
            from: Coord::new(1, 3),
            over: Coord::new(2, 3),
            to: Coord::new(3, 3),
        };
        assert_eq!(format!("{}", mv), "Peg(2) (1, 3) -> (3, 3) over (2, 3)");
    }
}
