//! Pointer invariant: the displayed index always names a recorded snapshot.

use super::Invariant;
use crate::History;

/// Invariant: `0 <= current_move < len`.
pub struct PointerInRangeInvariant;

impl Invariant<History> for PointerInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.current_move() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current move points at a recorded snapshot"
    }
}
