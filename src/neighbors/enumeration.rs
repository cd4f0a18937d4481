//! Exhaustive constrained re-enumeration of feasible arrangements.

use crate::models::{Arrangement, ConstraintSet, SlotId, TypeMap};

/// Source of every feasible arrangement of a given loaded set.
///
/// Implementations must return arrangements that place exactly the
/// automobiles in `loaded` (no others, none omitted) into distinct slots
/// from `slots`, each feasible under `constraints`. An implementation may
/// prune constraint-aware internally; the planner re-checks every returned
/// arrangement with the
/// [`FeasibilityChecker`](crate::feasibility::FeasibilityChecker) anyway.
///
/// This trait is the seam for plugging in an external enumerator; the
/// planner never depends on how the enumeration is carried out.
pub trait ArrangementEnumerator {
    /// Every feasible complete arrangement of the loaded automobiles.
    fn enumerate_feasible(
        &self,
        loaded: &TypeMap,
        slots: &[SlotId],
        constraints: &ConstraintSet,
    ) -> Vec<Arrangement>;
}
