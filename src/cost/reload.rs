//! Reload counting between two arrangements.
//!
//! # Algorithm
//!
//! Read each arrangement from the highest slot position down to the lowest
//! and drop the empty slots; the result is the physical loading order
//! (highest position loaded first, so the last entry is at the accessible
//! end). Compare the two orders position by position from the front:
//!
//! ```text
//! from: [5, 3, 1]          to: [5, 1, 2]
//!           ^ first divergence at position 1
//! cost = |{3, 1} ∩ {1, 2}| = 1
//! ```
//!
//! At the first divergence, every automobile common to both remaining tails
//! must be taken off and re-placed to realize the reordering, so the cost is
//! the size of the tail intersection. If one order is a prefix of the other
//! there is no divergence and nothing is disturbed: cost 0.

use rustc_hash::FxHashSet;

use crate::models::Arrangement;

/// Number of automobiles that must be removed and re-placed to go from one
/// arrangement to the next.
///
/// # Examples
///
/// ```
/// use u_loading::cost::reload_cost;
/// use u_loading::models::Arrangement;
///
/// let from = Arrangement::from_slots(vec![1, 3, 5, 0, 0]);
/// // The automobile at the accessible end is gone; the remaining order
/// // [5, 3] is a prefix of [5, 3, 1], so nothing is disturbed.
/// let to = Arrangement::from_slots(vec![0, 3, 5, 0, 0]);
/// assert_eq!(reload_cost(&from, &to), 0);
///
/// // Swapping two automobiles reorders the tail and disturbs both.
/// let swapped = Arrangement::from_slots(vec![3, 1, 5, 0, 0]);
/// assert_eq!(reload_cost(&from, &swapped), 2);
/// ```
pub fn reload_cost(from: &Arrangement, to: &Arrangement) -> u32 {
    let from_order = from.loading_order();
    let to_order = to.loading_order();
    let shorter = from_order.len().min(to_order.len());

    for i in 0..shorter {
        if from_order[i] != to_order[i] {
            let from_tail: FxHashSet<_> = from_order[i..].iter().copied().collect();
            return to_order[i..]
                .iter()
                .filter(|id| from_tail.contains(id))
                .count() as u32;
        }
    }

    0
}
