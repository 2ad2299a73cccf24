//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::History;

/// Invariant: Snapshot *k* differs from snapshot *k-1* in exactly one square,
/// and that square went from empty to occupied.
///
/// Together with [`NonEmptyHistoryInvariant`](super::NonEmptyHistoryInvariant)
/// this means snapshot *k* holds exactly *k* marks.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.diff(after).as_slice() {
                [pos] => before.is_empty(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
