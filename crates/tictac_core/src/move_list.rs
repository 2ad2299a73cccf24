//! Move list descriptors for history navigation.

use super::{History, Player};
use derive_getters::Getters;
use tracing::instrument;

/// Display order of the move list. Has no effect on history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveOrder {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

impl MoveOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label for the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Oldest first",
            Self::Descending => "Newest first",
        }
    }
}

/// Whether a move list entry can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A snapshot other than the current one; activating it jumps there.
    JumpTarget,
    /// The snapshot at the pointer, shown as status text.
    Current,
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct MoveDescriptor {
    /// History index this entry refers to.
    move_number: usize,
    /// Jump target or current-position marker.
    kind: EntryKind,
}

impl MoveDescriptor {
    /// Returns true for the entry at the pointer.
    pub fn is_current(&self) -> bool {
        self.kind == EntryKind::Current
    }

    /// Player who made this move, `None` for the game start.
    pub fn author(&self) -> Option<Player> {
        Player::author_of(self.move_number)
    }

    /// Text shown for the entry.
    pub fn label(&self) -> String {
        match (self.kind, self.move_number) {
            (EntryKind::Current, n) => format!("You're at move #{}", n),
            (EntryKind::JumpTarget, 0) => "Go to game start".to_string(),
            (EntryKind::JumpTarget, n) => format!("Go to move #{}", n),
        }
    }
}

/// Builds one descriptor per snapshot in `order`.
#[instrument(skip(history), fields(len = history.len(), current = history.current_move()))]
pub fn describe(history: &History, order: MoveOrder) -> Vec<MoveDescriptor> {
    let current = history.current_move();
    let descriptor = |move_number: usize| MoveDescriptor {
        move_number,
        kind: if move_number == current {
            EntryKind::Current
        } else {
            EntryKind::JumpTarget
        },
    };
    match order {
        MoveOrder::Ascending => (0..history.len()).map(descriptor).collect(),
        MoveOrder::Descending => (0..history.len()).rev().map(descriptor).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn three_moves() -> History {
        let mut history = History::new();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            let next = history.current().with_mark(pos, history.to_move());
            history.record(next);
        }
        history
    }

    #[test]
    fn test_new_history_has_single_current_entry() {
        let entries = describe(&History::new(), MoveOrder::Ascending);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_current());
        assert_eq!(entries[0].label(), "You're at move #0");
    }

    #[test]
    fn test_labels_ascending() {
        let mut history = three_moves();
        history.jump_to(1).unwrap();
        let labels: Vec<String> = describe(&history, MoveOrder::Ascending)
            .iter()
            .map(MoveDescriptor::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "You're at move #1",
                "Go to move #2",
                "Go to move #3",
            ]
        );
    }

    #[test]
    fn test_descending_reverses_only_order() {
        let history = three_moves();
        let ascending = describe(&history, MoveOrder::Ascending);
        let mut descending = describe(&history, MoveOrder::Descending);
        assert_eq!(*descending[0].move_number(), 3);
        assert!(descending[0].is_current());
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_author_parity() {
        let entries = describe(&three_moves(), MoveOrder::Ascending);
        let authors: Vec<Option<Player>> = entries.iter().map(MoveDescriptor::author).collect();
        assert_eq!(
            authors,
            vec![None, Some(Player::X), Some(Player::O), Some(Player::X)]
        );
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }
}
