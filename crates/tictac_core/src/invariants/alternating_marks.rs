//! Alternating marks invariant: X fills odd-numbered moves, O even-numbered.

use super::Invariant;
use crate::{History, Player};

/// Invariant: The square filled by move *k* holds X when *k* is odd and O
/// when *k* is even.
///
/// Steps that do not add exactly one mark are left to
/// [`SingleCellDeltaInvariant`](super::SingleCellDeltaInvariant).
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => pair[1].get(*pos).player() == Player::author_of(i + 1),
                _ => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
