//! Status and phase derivation for a single snapshot.
//!
//! Both are pure functions of a board and the number of moves that produced
//! it, so any history index can be evaluated on demand.

use crate::rules::{WinningLine, find_winning_line, is_draw};
use crate::{Board, Player};
use tracing::instrument;

/// What the status line reports for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Nobody has won and there is space left.
    ToMove(Player),
    /// A line is complete.
    Won {
        /// Owner of the first square of `line`.
        winner: Player,
        /// The first completed line in evaluation order.
        line: WinningLine,
    },
    /// Board is full without a completed line.
    Tie,
}

impl GameStatus {
    /// Evaluates `board`, reached after `move_number` moves.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, move_number: usize) -> Self {
        if let Some(line) = find_winning_line(board)
            && let Some(winner) = board.get(line.positions()[0]).player()
        {
            return GameStatus::Won { winner, line };
        }
        if is_draw(board) {
            return GameStatus::Tie;
        }
        GameStatus::ToMove(Player::to_move_after(move_number))
    }

    /// Returns true once no further move can be accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::ToMove(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::ToMove(player) => write!(f, "{} is on the move", player),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Tie => write!(f, "It's a Tie!"),
        }
    }
}

/// Session phase for the snapshot at the current pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Phase {
    /// Empty board, X to play.
    #[display("No moves made")]
    NoMovesMade,
    /// At least one move, game not decided.
    #[display("In progress")]
    InProgress,
    /// A winning line exists.
    #[display("Won")]
    Won,
    /// Board full, no winner.
    #[display("Tied")]
    Tied,
}

impl Phase {
    /// Derives the phase from a status and the move number it was evaluated at.
    #[instrument]
    pub fn from_status(status: &GameStatus, move_number: usize) -> Self {
        match status {
            GameStatus::Won { .. } => Phase::Won,
            GameStatus::Tie => Phase::Tied,
            GameStatus::ToMove(_) if move_number == 0 => Phase::NoMovesMade,
            GameStatus::ToMove(_) => Phase::InProgress,
        }
    }

    /// Won and Tied block new moves; navigation is always allowed.
    pub fn accepts_moves(self) -> bool {
        matches!(self, Phase::NoMovesMade | Phase::InProgress)
    }
}
