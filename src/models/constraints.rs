//! Placement constraint types.

use serde::{Deserialize, Serialize};

use super::SlotId;

/// Forbids automobiles of one type from occupying one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenSlot {
    /// Automobile type this rule applies to.
    pub auto_type: String,
    /// Slot the type may never occupy.
    pub slot: SlotId,
}

/// Reserves a pair of slots as a single oversized unit for one type.
///
/// If an automobile of the type occupies either slot of the pair, the other
/// slot of the pair must remain empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedSlots {
    /// Automobile type this rule applies to.
    pub auto_type: String,
    /// First slot of the pair.
    pub first: SlotId,
    /// Second slot of the pair.
    pub second: SlotId,
}

/// Forbids two types from simultaneously occupying two specific slots.
///
/// If an automobile of `type_a` occupies `slot_a`, no automobile of
/// `type_b` may occupy `slot_b` at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseExclusion {
    /// First automobile type.
    pub type_a: String,
    /// Slot checked for `type_a`.
    pub slot_a: SlotId,
    /// Second automobile type.
    pub type_b: String,
    /// Slot checked for `type_b`.
    pub slot_b: SlotId,
}

/// The full set of placement constraints for a run.
///
/// Three independent collections, fixed for the whole run: single-slot
/// forbidden rules, co-located slot pairs, and pairwise exclusions.
///
/// # Examples
///
/// ```
/// use u_loading::models::ConstraintSet;
///
/// let mut constraints = ConstraintSet::new();
/// constraints.add_forbidden("T1", 2);
/// constraints.add_paired("T4", 1, 2);
/// constraints.add_exclusion("T3", 3, "T1", 2);
///
/// assert_eq!(constraints.forbidden().len(), 1);
/// assert_eq!(constraints.paired().len(), 1);
/// assert_eq!(constraints.exclusions().len(), 1);
/// assert!(!constraints.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    forbidden: Vec<ForbiddenSlot>,
    paired: Vec<PairedSlots>,
    exclusions: Vec<PairwiseExclusion>,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-slot forbidden rule.
    pub fn add_forbidden(&mut self, auto_type: impl Into<String>, slot: SlotId) {
        self.forbidden.push(ForbiddenSlot {
            auto_type: auto_type.into(),
            slot,
        });
    }

    /// Adds a co-located slot pair rule.
    pub fn add_paired(&mut self, auto_type: impl Into<String>, first: SlotId, second: SlotId) {
        self.paired.push(PairedSlots {
            auto_type: auto_type.into(),
            first,
            second,
        });
    }

    /// Adds a pairwise exclusion rule.
    pub fn add_exclusion(
        &mut self,
        type_a: impl Into<String>,
        slot_a: SlotId,
        type_b: impl Into<String>,
        slot_b: SlotId,
    ) {
        self.exclusions.push(PairwiseExclusion {
            type_a: type_a.into(),
            slot_a,
            type_b: type_b.into(),
            slot_b,
        });
    }

    /// Single-slot forbidden rules.
    pub fn forbidden(&self) -> &[ForbiddenSlot] {
        &self.forbidden
    }

    /// Co-located slot pair rules.
    pub fn paired(&self) -> &[PairedSlots] {
        &self.paired
    }

    /// Pairwise exclusion rules.
    pub fn exclusions(&self) -> &[PairwiseExclusion] {
        &self.exclusions
    }

    /// Returns `true` if no rules are present.
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty() && self.paired.is_empty() && self.exclusions.is_empty()
    }

    /// Every slot id referenced by any rule.
    pub fn referenced_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        let forbidden = self.forbidden.iter().map(|r| r.slot);
        let paired = self.paired.iter().flat_map(|r| [r.first, r.second]);
        let exclusions = self.exclusions.iter().flat_map(|r| [r.slot_a, r.slot_b]);
        forbidden.chain(paired).chain(exclusions)
    }
}
