//! Read-only view models handed from the game to the board and its squares.

use super::{Board, GameStatus, Player, Position, Square};
use derive_getters::Getters;
use tracing::instrument;

/// Everything a square needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct SquareView {
    /// Fixed position this square reports when activated.
    position: Position,
    /// Current value.
    square: Square,
    /// Part of the winning line.
    highlighted: bool,
    /// A winner exists and this square is not on the line.
    dimmed: bool,
}

/// Everything the board needs to draw itself, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Squares in row-major order.
    squares: [SquareView; 9],
    /// Whose turn it is at this snapshot.
    to_move: Player,
    /// Status line for this snapshot.
    status: GameStatus,
}

impl BoardView {
    /// Builds the view for `board`, reached after `move_number` moves.
    #[instrument(skip(board))]
    pub fn new(board: &Board, move_number: usize) -> Self {
        let status = GameStatus::evaluate(board, move_number);
        let line = status.winning_line();
        let squares = Position::ALL.map(|position| {
            let highlighted = line.is_some_and(|l| l.contains(position));
            SquareView {
                position,
                square: board.get(position),
                highlighted,
                dimmed: line.is_some() && !highlighted,
            }
        });
        Self {
            squares,
            to_move: Player::to_move_after(move_number),
            status,
        }
    }

    /// The view for one position.
    pub fn square(&self, pos: Position) -> &SquareView {
        &self.squares[pos.to_index()]
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(3)
    }
}
