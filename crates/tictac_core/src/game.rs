//! The game controller: sole owner of history and move-list order.
//!
//! Views query it for derived state and send it commands; nothing else
//! mutates the session.

use super::action::{Move, MoveError};
use super::contracts::apply_move;
use super::history::{History, HistoryError};
#[cfg(debug_assertions)]
use super::invariants::{HistoryInvariants, InvariantSet};
use super::move_list::{MoveDescriptor, MoveOrder, describe};
use super::rules::WinningLine;
use super::status::{GameStatus, Phase};
use super::view::BoardView;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// A tic-tac-toe session with time travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
    order: MoveOrder,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            order,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Plays the next player's mark at `position` on the current snapshot.
    ///
    /// On success the new snapshot is recorded after the pointer, discarding
    /// any later moves, and the resulting phase is returned.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition, or an invariant violation in
    /// debug builds; history and pointer are left untouched.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn play(&mut self, position: Position) -> Result<Phase, MoveError> {
        let action = Move::new(self.to_move(), position);
        let next = apply_move(self.history.current(), action).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let mut history = self.history.clone();
        history.record(next);

        #[cfg(debug_assertions)]
        check_invariants(&history).map_err(MoveError::InvariantViolation)?;

        self.history = history;
        let phase = self.phase();
        info!(action = %action, phase = %phase, "Move recorded");
        Ok(phase)
    }

    /// Moves the pointer to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] for an unrecorded move, or an
    /// invariant violation in debug builds. The pointer is left untouched.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        let mut history = self.history.clone();
        history.jump_to(index)?;

        #[cfg(debug_assertions)]
        check_invariants(&history).map_err(HistoryError::InvariantViolation)?;

        self.history = history;
        Ok(())
    }

    /// Flips the move list order and returns the new order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> MoveOrder {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move order toggled");
        self.order
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The snapshot at the pointer.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// The pointer.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Whose turn it is at the pointer.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Status of the snapshot at the pointer.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.current_move())
    }

    /// Phase of the snapshot at the pointer.
    pub fn phase(&self) -> Phase {
        Phase::from_status(&self.status(), self.current_move())
    }

    /// Winning line of the snapshot at the pointer.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status().winning_line()
    }

    /// Move list entries in the current order.
    pub fn moves(&self) -> Vec<MoveDescriptor> {
        describe(&self.history, self.order)
    }

    /// View model for the board at the pointer.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(self.current_board(), self.current_move())
    }
}

/// Runs the history invariant set, joining all violations into one message.
#[cfg(debug_assertions)]
fn check_invariants(history: &History) -> Result<(), String> {
    HistoryInvariants::check_all(history).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "History invariants violated");
        descriptions
    })
}
