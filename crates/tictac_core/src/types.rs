//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use super::position::Position;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `move_number` moves.
    ///
    /// X moves on even counts (including the empty board), O on odd counts.
    #[instrument]
    pub fn to_move_after(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the player who made move `move_number`, or `None` for the
    /// empty starting board.
    #[instrument]
    pub fn author_of(move_number: usize) -> Option<Self> {
        match move_number {
            0 => None,
            n => Some(Self::to_move_after(n - 1)),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// One immutable 3x3 snapshot of the board.
///
/// Boards are `Copy` and have no public mutator: the only way to get a
/// different board is [`Board::with_mark`], which returns a fresh copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// This does not check whether `pos` was empty; move validation lives
    /// in the contracts module.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Board {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Positions whose square differs between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

/// Error returned when a board layout string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.` or `_` was found.
    #[display("Unexpected board character {:?}", _0)]
    UnexpectedChar(char),

    /// The layout did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a row-major layout such as `"XO. .X. ..O"`.
    ///
    /// `X`/`O` (either case) are marks, `.` and `_` are empty squares,
    /// whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => squares.push(Square::Occupied(Player::X)),
                'O' | 'o' => squares.push(Square::Occupied(Player::O)),
                '.' | '_' => squares.push(Square::Empty),
                '|' => {}
                c if c.is_whitespace() => {}
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            }
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_helpers() {
        assert_eq!(Player::to_move_after(0), Player::X);
        assert_eq!(Player::to_move_after(1), Player::O);
        assert_eq!(Player::to_move_after(4), Player::X);
        assert_eq!(Player::author_of(0), None);
        assert_eq!(Player::author_of(1), Some(Player::X));
        assert_eq!(Player::author_of(2), Some(Player::O));
        assert_eq!(Player::author_of(9), Some(Player::X));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.diff(&next), vec![Position::Center]);
    }

    #[test]
    fn test_parse_layout() {
        let board: Board = "XO. | .X. | ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('Z'))
        );
    }
}
