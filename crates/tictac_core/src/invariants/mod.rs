//! First-class invariants over the snapshot history.
//!
//! Each invariant is a logical property of a [`History`](crate::History)
//! that must hold after every accepted command. They are testable on their
//! own and composed into [`HistoryInvariants`] for the post-command check.

mod alternating_marks;
mod non_empty;
mod pointer_in_range;
mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use non_empty::NonEmptyHistoryInvariant;
pub use pointer_in_range::PointerInRangeInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s; every member is checked and
/// all failures are reported, not just the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    NonEmptyHistoryInvariant,
    PointerInRangeInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
);
