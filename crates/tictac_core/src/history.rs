//! Snapshot history with a movable pointer.
//!
//! Index 0 is always the empty board and index *k* is the board after *k*
//! moves. Recording from an earlier pointer discards everything after it.

use super::{Board, Player};
use tracing::{debug, info, instrument};

/// Error returned by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index does not name a recorded snapshot.
    #[display("Move #{} is out of range (history holds {} snapshots)", index, len)]
    OutOfRange {
        /// Requested move number.
        index: usize,
        /// Number of snapshots recorded.
        len: usize,
    },

    /// The jump would leave history inconsistent.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HistoryError {}

/// Ordered board snapshots plus the index currently displayed.
///
/// Never empty; the pointer always names a recorded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Number of recorded snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot being displayed.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Index of the newest snapshot.
    pub fn latest_move(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The snapshot at the pointer.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Player whose turn it is at the pointer.
    pub fn to_move(&self) -> Player {
        Player::to_move_after(self.current)
    }

    /// Records `snapshot` as the move after the pointer.
    ///
    /// Snapshots after the pointer are discarded first, so the new length is
    /// always `current_move() + 2` before the call. Returns the new pointer.
    #[instrument(skip(self, snapshot), fields(from = self.current, len = self.snapshots.len()))]
    pub fn record(&mut self, snapshot: Board) -> usize {
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding moves after branch point");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(snapshot);
        self.current = self.snapshots.len() - 1;
        info!(current_move = self.current, "Snapshot recorded");
        self.current
    }

    /// Moves the pointer to `index` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] and leaves the pointer unchanged
    /// if `index` is not a recorded move.
    #[instrument(skip(self), fields(from = self.current))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            debug!(len = self.snapshots.len(), "Jump rejected");
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        info!(current_move = index, "Jumped to move");
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
