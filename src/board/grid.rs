//! The board: slot grid, peg index, move legality, and jump execution.
//!
//! ## Representation
//!
//! - `cells`: fixed-length row-major `im::Vector<Slot>` (height x width)
//! - `pegs`: id -> coordinate index for every peg still on the board
//!
//! `execute_move` (and `apply_move`, which it wraps) is the only public
//! mutator and keeps both fields in sync. Restoring a snapshot rebuilds the
//! index from the grid.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::layout::Layout;
use super::moves::{JumpMove, Origin};
use super::snapshot::Snapshot;
use crate::core::{Coord, Direction, PegId, Slot};

/// Legal jumps from one position. 16 covers all but the busiest positions.
pub type MoveList = SmallVec<[JumpMove; 16]>;

/// A peg solitaire board.
#[derive(Clone, Debug)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vector<Slot>,
    pegs: FxHashMap<PegId, Coord>,
}

impl Board {
    /// Create the standard English board: 7x7 cross, centre empty, 32 pegs.
    ///
    /// ```
    /// use peg_solitaire::Board;
    ///
    /// let board = Board::english();
    /// assert_eq!(board.dimensions(), (7, 7));
    /// assert_eq!(board.score(), 32);
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::from_layout(&Layout::ENGLISH)
    }

    /// Alias for [`Board::english`].
    #[must_use]
    pub fn new() -> Self {
        Self::english()
    }

    fn from_layout(layout: &Layout) -> Self {
        let mut board = Self {
            height: layout.height(),
            width: layout.width(),
            cells: layout.populate(),
            pegs: FxHashMap::default(),
        };
        board.reindex();
        board
    }

    // === Geometry ===

    /// `(height, width)` of the grid.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index / self.width) as i32, (index % self.width) as i32)
    }

    /// Contents of the slot at `coord`. Coordinates outside the grid read as
    /// [`Slot::OffBoard`].
    #[must_use]
    pub fn slot(&self, coord: Coord) -> Slot {
        self.index_of(coord).map_or(Slot::OffBoard, |i| self.cells[i])
    }

    /// Slots of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Slot> + '_ {
        let start = row
            .checked_mul(self.width)
            .map_or(self.cells.len(), |start| start.min(self.cells.len()));
        let end = (start + self.width).min(self.cells.len());
        self.cells.iter().skip(start).take(end - start).copied()
    }

    /// Number of playable (not off-board) slots.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_playable()).count()
    }

    // === Pegs ===

    /// Number of pegs on the board.
    #[must_use]
    pub fn score(&self) -> usize {
        debug_assert_eq!(
            self.pegs.len(),
            self.cells.iter().filter(|s| s.is_occupied()).count(),
            "peg index out of sync with grid"
        );
        self.pegs.len()
    }

    /// Where peg `peg` currently stands.
    ///
    /// `None` for ids never assigned (including 0) and for captured pegs.
    #[must_use]
    pub fn locate(&self, peg: PegId) -> Option<Coord> {
        self.pegs.get(&peg).copied()
    }

    /// Occupied slots in row-major order.
    pub fn pegs(&self) -> impl Iterator<Item = (Coord, PegId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.peg().map(|peg| (self.coord_of(i), peg)))
    }

    // === Moves ===

    /// Resolve `origin` and check every jump rule, returning the full move.
    ///
    /// Rules:
    /// 1. `dest` is in bounds and `Empty`
    /// 2. `origin` resolves to an `Occupied` slot
    /// 3. `origin` and `dest` share one axis at distance exactly 2
    /// 4. the slot between them is `Occupied`
    #[must_use]
    pub fn jump(&self, dest: Coord, origin: Origin) -> Option<JumpMove> {
        if !self.slot(dest).is_empty() {
            return None;
        }

        let from = match origin {
            Origin::Peg(peg) => self.locate(peg)?,
            Origin::At(coord) => coord,
        };
        let peg = self.slot(from).peg()?;
        let over = from.midpoint(dest)?;

        self.slot(over).is_occupied().then_some(JumpMove {
            peg,
            from,
            over,
            to: dest,
        })
    }

    /// Whether moving `origin` to `dest` is a legal jump. Never mutates.
    #[must_use]
    pub fn is_valid_move(&self, dest: Coord, origin: Origin) -> bool {
        self.jump(dest, origin).is_some()
    }

    /// Execute the jump if it is legal, returning what happened.
    ///
    /// An illegal request leaves the board untouched and returns `None`.
    pub fn apply_move(&mut self, dest: Coord, origin: Origin) -> Option<JumpMove> {
        let mv = self.jump(dest, origin)?;
        assert!(mv.is_colinear(), "validated jump is not colinear: {:?}", mv);

        if let Some(captured) = self.slot(mv.over).peg() {
            self.pegs.remove(&captured);
        }
        self.put(mv.from, Slot::Empty);
        self.put(mv.over, Slot::Empty);
        self.put(mv.to, Slot::Occupied(mv.peg));
        self.pegs.insert(mv.peg, mv.to);

        Some(mv)
    }

    /// Execute the jump if it is legal. Returns whether the board changed.
    pub fn execute_move(&mut self, dest: Coord, origin: Origin) -> bool {
        self.apply_move(dest, origin).is_some()
    }

    fn put(&mut self, coord: Coord, slot: Slot) {
        let index = self
            .index_of(coord)
            .unwrap_or_else(|| panic!("write outside the grid at {}", coord));
        self.cells.set(index, slot);
    }

    fn jumps_from(&self, from: Coord) -> impl Iterator<Item = JumpMove> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.jump(from.offset(dir, 2)?, Origin::At(from)))
    }

    /// Every legal jump, ordered by origin (row-major) then direction.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.pegs().flat_map(|(from, _)| self.jumps_from(from)).collect()
    }

    /// Whether any legal jump remains. The game ends when this is false.
    #[must_use]
    pub fn move_possible(&self) -> bool {
        self.pegs().any(|(from, _)| self.jumps_from(from).next().is_some())
    }

    // === Snapshots ===

    /// Capture the slot grid.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
        }
    }

    /// Whether the live grid equals `snapshot`.
    #[must_use]
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.cells == snapshot.cells
    }

    /// Overwrite the grid with `snapshot` and rebuild the peg index.
    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(
            snapshot.cells.len(),
            self.cells.len(),
            "snapshot taken from a board of different dimensions"
        );
        self.cells = snapshot.cells.clone();
        self.reindex();
    }

    fn reindex(&mut self) {
        let pegs: FxHashMap<PegId, Coord> = self.pegs().map(|(coord, peg)| (peg, coord)).collect();
        self.pegs = pegs;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::english()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height && self.width == other.width && self.cells == other.cells
    }
}

impl Eq for Board {}
