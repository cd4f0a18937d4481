//! Feasibility predicate over carrier arrangements.

use rustc_hash::FxHashMap;

use crate::models::{Arrangement, AutomobileId, ConstraintSet, SlotId, TypeMap, EMPTY};

/// Checks arrangements against the three placement constraint families.
///
/// Evaluation is short-circuit in family order: single-slot forbidden rules
/// first, then co-located pairs, then pairwise exclusions. The check is a
/// pure predicate: it never mutates anything and never assumes incremental
/// validity from a parent arrangement, so it can be applied to any candidate
/// independently.
///
/// A rule referencing a slot that is not on the carrier never binds.
///
/// # Examples
///
/// ```
/// use u_loading::feasibility::FeasibilityChecker;
/// use u_loading::models::{Arrangement, ConstraintSet, TypeMap};
///
/// let types: TypeMap = [(1, "T1")].into_iter().collect();
/// let mut constraints = ConstraintSet::new();
/// constraints.add_forbidden("T1", 2);
///
/// let slots = vec![1, 2, 3];
/// let checker = FeasibilityChecker::new(&constraints, &types, &slots);
///
/// // Automobile 1 (type T1) in slot 1 is fine, in slot 2 it is forbidden.
/// assert!(checker.is_feasible(&Arrangement::from_slots(vec![1, 0, 0])));
/// assert!(!checker.is_feasible(&Arrangement::from_slots(vec![0, 1, 0])));
/// ```
pub struct FeasibilityChecker<'a> {
    constraints: &'a ConstraintSet,
    types: &'a TypeMap,
    positions: FxHashMap<SlotId, usize>,
}

impl<'a> FeasibilityChecker<'a> {
    /// Creates a checker for the given constraints, type map, and slot list.
    pub fn new(constraints: &'a ConstraintSet, types: &'a TypeMap, slot_ids: &[SlotId]) -> Self {
        let positions = slot_ids
            .iter()
            .enumerate()
            .map(|(position, &slot)| (slot, position))
            .collect();
        Self {
            constraints,
            types,
            positions,
        }
    }

    /// Returns `true` if the arrangement violates no placement constraint.
    pub fn is_feasible(&self, arrangement: &Arrangement) -> bool {
        for rule in self.constraints.forbidden() {
            if self.slot_holds_type(arrangement, rule.slot, &rule.auto_type) {
                return false;
            }
        }

        for rule in self.constraints.paired() {
            if self.slot_holds_type(arrangement, rule.first, &rule.auto_type)
                && self.slot_occupied(arrangement, rule.second)
            {
                return false;
            }
            if self.slot_holds_type(arrangement, rule.second, &rule.auto_type)
                && self.slot_occupied(arrangement, rule.first)
            {
                return false;
            }
        }

        for rule in self.constraints.exclusions() {
            if self.slot_holds_type(arrangement, rule.slot_a, &rule.type_a)
                && self.slot_holds_type(arrangement, rule.slot_b, &rule.type_b)
            {
                return false;
            }
        }

        true
    }

    fn occupant(&self, arrangement: &Arrangement, slot: SlotId) -> Option<AutomobileId> {
        let &position = self.positions.get(&slot)?;
        let id = arrangement.occupant(position);
        (id != EMPTY).then_some(id)
    }

    fn slot_occupied(&self, arrangement: &Arrangement, slot: SlotId) -> bool {
        self.occupant(arrangement, slot).is_some()
    }

    fn slot_holds_type(&self, arrangement: &Arrangement, slot: SlotId, auto_type: &str) -> bool {
        self.occupant(arrangement, slot)
            .is_some_and(|id| self.types.get(id) == Some(auto_type))
    }
}
