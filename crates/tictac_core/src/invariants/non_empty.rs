//! Non-empty invariant: the empty starting board is never removed.

use super::Invariant;
use crate::{Board, History};

/// Invariant: History starts with the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<History> for NonEmptyHistoryInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(NonEmptyHistoryInvariant::holds(&History::new()));
    }

    #[test]
    fn test_missing_start_violates() {
        let history = History {
            snapshots: vec![Board::new().with_mark(Position::Center, Player::X)],
            current: 0,
        };
        assert!(!NonEmptyHistoryInvariant::holds(&history));
    }
}
