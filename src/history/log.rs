//! Bounded circular undo/redo log of board snapshots.

use super::cursor::HistoryCursor;
use crate::board::{Board, Snapshot};
use crate::core::HistoryError;

/// Fixed-capacity checkpoint log over a [`Board`].
///
/// The log never holds a reference to the board; each operation borrows it.
/// Undo is lazy: a board with an uncommitted change is first rolled back to
/// the current entry, and only an undo on an unchanged board steps back.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    snapshots: Vec<Snapshot>,
    cursor: HistoryCursor,
}

impl HistoryLog {
    /// Create a log of `capacity` entries holding `board` as its only entry.
    ///
    /// ```
    /// use peg_solitaire::{Board, HistoryLog, HistoryError};
    ///
    /// let board = Board::english();
    /// assert!(HistoryLog::new(8, &board).is_ok());
    /// assert_eq!(HistoryLog::new(0, &board).unwrap_err(), HistoryError::ZeroCapacity);
    /// ```
    pub fn new(capacity: usize, board: &Board) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self {
            snapshots: vec![board.snapshot(); capacity],
            cursor: HistoryCursor::initial(capacity),
        })
    }

    /// Number of entries in the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.snapshots.len()
    }

    /// Current pointer positions.
    #[must_use]
    pub fn cursor(&self) -> HistoryCursor {
        self.cursor
    }

    /// The entry at `current`.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor.current]
    }

    /// Whether `board` differs from the current entry.
    #[must_use]
    pub fn has_pending_change(&self, board: &Board) -> bool {
        !board.matches(self.current())
    }

    /// Committed entries behind `current`.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.cursor.undo_depth(self.capacity())
    }

    /// Committed entries ahead of `current`.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.cursor.redo_depth(self.capacity())
    }

    /// Record `board` as a new entry unless it equals the current one.
    ///
    /// Returns whether an entry was written. Recording discards any redo
    /// entries and, once the buffer is full, the oldest undo entry.
    pub fn commit(&mut self, board: &Board) -> bool {
        if !self.has_pending_change(board) {
            return false;
        }
        self.cursor = self.cursor.committed(self.capacity());
        self.snapshots[self.cursor.current] = board.snapshot();
        true
    }

    /// Roll `board` back one step.
    ///
    /// A pending change is discarded first; otherwise `current` walks back to
    /// the nearest entry that differs from the board. Returns `false`, with
    /// the board untouched, once the oldest entry is reached.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let capacity = self.capacity();
        // At most `capacity - 1` steps separate current from oldest.
        for _ in 0..capacity {
            if self.has_pending_change(board) {
                board.restore(&self.snapshots[self.cursor.current]);
                return true;
            }
            match self.cursor.stepped_back(capacity) {
                Some(previous) => self.cursor = previous,
                None => return false,
            }
        }
        unreachable!("undo walked the whole buffer without reaching the oldest entry")
    }

    /// Move `board` forward one committed entry.
    ///
    /// Refused while the board has a pending change, or when no redo entry
    /// remains.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        if self.has_pending_change(board) {
            return false;
        }
        match self.cursor.stepped_forward(self.capacity()) {
            Some(next) => {
                self.cursor = next;
                board.restore(&self.snapshots[next.current]);
                true
            }
            None => false,
        }
    }

    /// Show every redo entry after `current`, in order.
    ///
    /// Each entry is restored into `board` and handed to `observer`; the board
    /// ends on the current entry (a pending change is dropped). Pointers are
    /// not touched. Returns the number of entries shown.
    pub fn replay<F>(&self, board: &mut Board, observer: F) -> usize
    where
        F: FnMut(&Board),
    {
        self.walk(self.cursor, board, observer)
    }

    /// Like [`replay`](Self::replay), but from the oldest entry, which is
    /// shown first, through the newest redo entry.
    pub fn replay_all<F>(&self, board: &mut Board, mut observer: F) -> usize
    where
        F: FnMut(&Board),
    {
        let start = HistoryCursor {
            current: self.cursor.oldest,
            ..self.cursor
        };
        board.restore(&self.snapshots[start.current]);
        observer(&*board);
        1 + self.walk(start, board, observer)
    }

    fn walk<F>(&self, mut cursor: HistoryCursor, board: &mut Board, mut observer: F) -> usize
    where
        F: FnMut(&Board),
    {
        let capacity = self.capacity();
        let mut shown = 0;
        while let Some(next) = cursor.stepped_forward(capacity) {
            cursor = next;
            board.restore(&self.snapshots[cursor.current]);
            observer(&*board);
            shown += 1;
        }
        board.restore(self.current());
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Origin;
    use crate::core::{Coord, PegId};

    fn jump(board: &mut Board, from: (i32, i32), to: (i32, i32)) {
        assert!(board.execute_move(Coord::from(to), Origin::At(Coord::from(from))));
    }

    #[test]
    fn test_new_log() {
        let board = Board::english();
        let log = HistoryLog::new(3, &board).unwrap();

        assert_eq!(log.capacity(), 3);
        assert_eq!(log.cursor(), HistoryCursor::initial(3));
        assert!(!log.has_pending_change(&board));
        assert_eq!(log.undo_depth(), 0);
        assert_eq!(log.redo_depth(), 0);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let board = Board::english();
        assert_eq!(HistoryLog::new(0, &board).unwrap_err(), HistoryError::ZeroCapacity);
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(4, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        assert!(log.commit(&board));
        let cursor = log.cursor();

        assert!(!log.commit(&board));
        assert_eq!(log.cursor(), cursor);
    }

    #[test]
    fn test_undo_pending_change() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(4, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        assert!(log.undo(&mut board));
        assert_eq!(board, Board::english());
        assert_eq!(log.cursor(), HistoryCursor::initial(4));

        // Nothing further back
        assert!(!log.undo(&mut board));
    }

    #[test]
    fn test_undo_then_redo() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(4, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        let after_first = board.clone();

        assert!(log.undo(&mut board));
        assert_eq!(board, Board::english());
        assert_eq!(log.redo_depth(), 1);

        assert!(log.redo(&mut board));
        assert_eq!(board, after_first);
        assert_eq!(board.locate(PegId(5)), Some(Coord::new(3, 3)));
        assert!(!log.redo(&mut board));
    }

    #[test]
    fn test_redo_refused_with_pending_change() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(4, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        log.undo(&mut board);

        // A different opening, not yet committed
        jump(&mut board, (3, 1), (3, 3));
        let pending = board.clone();
        assert!(!log.redo(&mut board));
        assert_eq!(board, pending);
    }

    #[test]
    fn test_commit_discards_redo() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(4, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        log.undo(&mut board);

        jump(&mut board, (3, 1), (3, 3));
        log.commit(&board);
        assert_eq!(log.redo_depth(), 0);
        assert!(!log.redo(&mut board));
        assert_eq!(log.undo_depth(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(3, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        jump(&mut board, (2, 1), (2, 3));
        log.commit(&board);
        jump(&mut board, (0, 2), (2, 2));
        log.commit(&board);

        assert_eq!(log.undo_depth(), 2);
        assert!(log.undo(&mut board));
        assert!(log.undo(&mut board));
        assert!(!log.undo(&mut board));
        // The starting position was evicted; one move remains applied
        assert_eq!(board.score(), 31);
    }

    #[test]
    fn test_replay_leaves_pointers() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(5, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        jump(&mut board, (2, 1), (2, 3));
        log.commit(&board);
        log.undo(&mut board);
        log.undo(&mut board);
        let cursor = log.cursor();

        let mut scores = Vec::new();
        let shown = log.replay(&mut board, |b| scores.push(b.score()));

        assert_eq!(shown, 2);
        assert_eq!(scores, vec![31, 30]);
        assert_eq!(log.cursor(), cursor);
        assert_eq!(board, Board::english());
    }

    #[test]
    fn test_replay_all_from_oldest() {
        let mut board = Board::english();
        let mut log = HistoryLog::new(5, &board).unwrap();

        jump(&mut board, (1, 3), (3, 3));
        log.commit(&board);
        jump(&mut board, (2, 1), (2, 3));
        log.commit(&board);
        let last = board.clone();

        let mut scores = Vec::new();
        let shown = log.replay_all(&mut board, |b| scores.push(b.score()));

        assert_eq!(shown, 3);
        assert_eq!(scores, vec![32, 31, 30]);
        assert_eq!(board, last);
    }
}
