//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The move
//! applier checks preconditions in a fixed order and produces a new snapshot;
//! recording that snapshot is the history's job, not the applier's.

use super::action::{Move, MoveError};
use super::rules::{check_winner, is_full};
use super::{Board, Square};
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No line is complete yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] when the board already has a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match check_winner(board) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] when the target is taken.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: At least one square is empty.
///
/// Implied by [`SquareIsEmpty`] but kept as its own step.
pub struct BoardHasSpace;

impl BoardHasSpace {
    /// Fails with [`MoveError::BoardFull`] when every square is taken.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if is_full(board) {
            Err(MoveError::BoardFull)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: no winner, target empty, space left.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(mov, board)?;
        BoardHasSpace::check(board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions on a snapshot.
///
/// Postcondition: exactly one square changed, and it went from empty to
/// occupied.
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        match before.diff(after).as_slice() {
            [pos] if before.get(*pos) == Square::Empty => Ok(()),
            [pos] => {
                warn!(position = %pos, "Occupied square overwritten");
                Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {} was overwritten",
                    pos
                )))
            }
            changed => {
                warn!(changed = changed.len(), "Snapshot changed in more than one square");
                Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {} squares changed, expected 1",
                    changed.len()
                )))
            }
        }
    }
}

/// Applies `action` to `board`, returning the next snapshot.
///
/// The input snapshot is never modified.
///
/// # Errors
///
/// Returns the first failing precondition. Postconditions are checked in
/// debug builds only.
#[instrument(skip(board, action), fields(action = %action))]
pub fn apply_move(board: &Board, action: Move) -> Result<Board, MoveError> {
    MoveContract::pre(board, &action)?;

    let next = board.with_mark(action.position, action.player);

    #[cfg(debug_assertions)]
    MoveContract::post(board, &next)?;

    debug!("Move applied to snapshot");
    Ok(next)
}
