//! Loading problem definition and input validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

use super::{AutomobileId, ConstraintSet, Route, SlotId, StopAction, TypeMap, EMPTY};

/// A complete, validated load-planning problem instance.
///
/// Bundles the construction inputs of a run: the stop route, the placement
/// constraints, the automobile type map, and the ordered slot id list. All
/// of them are read-only for the duration of the run.
///
/// Construction fails fast on malformed input (an untyped automobile, a
/// pickup/dropoff pairing violation, a constraint referencing an unknown
/// slot) so that no stage processing ever starts from a contract violation.
///
/// # Examples
///
/// ```
/// use u_loading::models::{ConstraintSet, LoadingProblem, Route, Stop, TypeMap};
///
/// let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
/// let route = Route::from_stops(vec![
///     Stop::pickup(1),
///     Stop::pickup(2),
///     Stop::dropoff(1),
///     Stop::dropoff(2),
/// ]);
/// let problem =
///     LoadingProblem::new(route, ConstraintSet::new(), types, vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(problem.slot_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingProblem {
    route: Route,
    constraints: ConstraintSet,
    types: TypeMap,
    slot_ids: Vec<SlotId>,
}

impl LoadingProblem {
    /// Creates a problem instance, validating the inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanningError`] if the route references an untyped or
    /// reserved automobile id, violates the picked-up-exactly-once-then-
    /// dropped-off-exactly-once invariant, the slot list repeats an id, or a
    /// constraint references a slot not on the carrier.
    pub fn new(
        route: Route,
        constraints: ConstraintSet,
        types: TypeMap,
        slot_ids: Vec<SlotId>,
    ) -> Result<Self, PlanningError> {
        let mut seen = FxHashSet::default();
        for &slot in &slot_ids {
            if !seen.insert(slot) {
                return Err(PlanningError::DuplicateSlot { slot });
            }
        }
        for slot in constraints.referenced_slots() {
            if !seen.contains(&slot) {
                return Err(PlanningError::UnknownConstraintSlot { slot });
            }
        }

        let mut picked_up = FxHashSet::default();
        let mut on_board = FxHashSet::default();
        for (stop, s) in route.stops().iter().enumerate() {
            let automobile = s.automobile;
            if automobile == EMPTY {
                return Err(PlanningError::ReservedAutomobileId { stop });
            }
            if !types.contains(automobile) {
                return Err(PlanningError::UnknownAutomobileType { automobile });
            }
            match s.action {
                StopAction::Pickup => {
                    if !picked_up.insert(automobile) {
                        return Err(PlanningError::DuplicatePickup { automobile, stop });
                    }
                    on_board.insert(automobile);
                }
                StopAction::Dropoff => {
                    if !on_board.remove(&automobile) {
                        return Err(PlanningError::DropoffWithoutPickup { automobile, stop });
                    }
                }
            }
        }
        if let Some(&automobile) = on_board.iter().min() {
            return Err(PlanningError::NeverDroppedOff { automobile });
        }

        Ok(Self {
            route,
            constraints,
            types,
            slot_ids,
        })
    }

    /// The stop route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The placement constraints.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The automobile type map.
    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    /// The ordered slot id list.
    pub fn slot_ids(&self) -> &[SlotId] {
        &self.slot_ids
    }

    /// Number of slots on the carrier.
    pub fn slot_count(&self) -> usize {
        self.slot_ids.len()
    }

    /// Ids of the automobiles on board after the first `stops` stops.
    pub(crate) fn loaded_after(&self, stops: usize) -> Vec<AutomobileId> {
        let mut on_board = Vec::new();
        for s in &self.route.stops()[..stops] {
            match s.action {
                StopAction::Pickup => on_board.push(s.automobile),
                StopAction::Dropoff => on_board.retain(|&id| id != s.automobile),
            }
        }
        on_board
    }
}
