//! First-class action types for tic-tac-toe.
//!
//! A move is the player's intent. It is validated against a snapshot before
//! any new snapshot is produced.

use super::{Player, Position};
use derive_new::new;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not recorded.
///
/// Front-ends treat these as silent no-ops; they exist so the reason can be
/// logged and tested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The snapshot already contains a winning line.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// No empty square is left.
    #[display("Board is full")]
    BoardFull,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
