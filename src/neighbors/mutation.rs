//! Incremental local mutation of a parent arrangement.
//!
//! # Reshuffle model
//!
//! Slots are ordered; the highest position is loaded first, so the low end
//! of the position range is the accessible end of the carrier. A pickup
//! only ever fills an empty slot and disturbs nothing else. A dropoff
//! frees the automobile's slot and may reshuffle the slots in front of it
//! (every position `<=` the freed one, the freed slot included, which is
//! the segment between the accessible end and the removal point); slots
//! behind the removal point are never disturbed.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::models::{Arrangement, AutomobileId};

/// Candidate arrangements for picking up `automobile`.
///
/// One candidate per empty slot, with the automobile placed there and every
/// other slot unchanged. Returns an empty vector when the carrier is full.
///
/// # Examples
///
/// ```
/// use u_loading::models::Arrangement;
/// use u_loading::neighbors::pickup_candidates;
///
/// let current = Arrangement::from_slots(vec![1, 0, 0]);
/// let candidates = pickup_candidates(&current, 2);
/// assert_eq!(candidates, vec![
///     Arrangement::from_slots(vec![1, 2, 0]),
///     Arrangement::from_slots(vec![1, 0, 2]),
/// ]);
/// ```
pub fn pickup_candidates(current: &Arrangement, automobile: AutomobileId) -> Vec<Arrangement> {
    let mut candidates = Vec::new();
    for position in 0..current.slot_count() {
        if current.is_empty_at(position) {
            let mut next = current.clone();
            next.place(position, automobile);
            candidates.push(next);
        }
    }
    candidates
}

/// Candidate arrangements for dropping off `automobile`.
///
/// The automobile's slot is freed, then the contents of every slot at or
/// before the freed position (the freed slot included) are permuted among
/// themselves while the remaining slots stay fixed. Candidates are
/// deduplicated, since permutations that only swap empty slots coincide.
/// Returns an empty vector when the automobile is not on board.
///
/// # Examples
///
/// ```
/// use u_loading::models::Arrangement;
/// use u_loading::neighbors::dropoff_candidates;
///
/// // Dropping 2 from position 1 reshuffles positions 0 and 1 only.
/// let current = Arrangement::from_slots(vec![1, 2, 3]);
/// let candidates = dropoff_candidates(&current, 2);
/// assert_eq!(candidates.len(), 2);
/// assert!(candidates.contains(&Arrangement::from_slots(vec![1, 0, 3])));
/// assert!(candidates.contains(&Arrangement::from_slots(vec![0, 1, 3])));
/// ```
pub fn dropoff_candidates(current: &Arrangement, automobile: AutomobileId) -> Vec<Arrangement> {
    let Some(freed) = current.position_of(automobile) else {
        return Vec::new();
    };

    let mut remaining = current.clone();
    remaining.clear(freed);
    let prefix = remaining.slots()[..=freed].to_vec();
    let suffix = &remaining.slots()[freed + 1..];

    let mut seen = FxHashSet::default();
    let mut candidates = Vec::new();
    for permutation in prefix.iter().copied().permutations(prefix.len()) {
        let mut slots = permutation;
        slots.extend_from_slice(suffix);
        let candidate = Arrangement::from_slots(slots);
        if seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    }
    candidates
}
