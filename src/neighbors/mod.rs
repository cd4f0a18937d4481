//! Candidate next-arrangement generation.
//!
//! Two interchangeable strategies feed the planner:
//!
//! - [`mutation`]: incremental local mutation of one parent arrangement
//!   (pickup placements, dropoff prefix reshuffles)
//! - [`enumeration`]: exhaustive constrained re-enumeration of every
//!   feasible arrangement of the currently loaded automobiles, via a
//!   pluggable [`ArrangementEnumerator`]
//!
//! Both feed through the feasibility checker before candidates are admitted
//! to the next stage.

pub mod enumeration;
pub mod mutation;

pub use enumeration::ArrangementEnumerator;
pub use mutation::{dropoff_candidates, pickup_candidates};

use std::fmt;

/// Selects how the planner generates candidate next arrangements.
///
/// The planner's optimal total is the same under either strategy; they
/// differ in how the candidate frontier is produced at each stop.
#[derive(Default)]
pub enum NeighborStrategy {
    /// Mutate each prior arrangement locally: place the picked-up
    /// automobile into an empty slot, or remove the dropped-off automobile
    /// and reshuffle the slots in front of it.
    #[default]
    LocalMutation,
    /// Re-enumerate the full feasible frontier for the loaded automobiles
    /// at every stop, independent of the prior arrangement.
    Exhaustive(Box<dyn ArrangementEnumerator>),
}

impl fmt::Debug for NeighborStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborStrategy::LocalMutation => f.write_str("LocalMutation"),
            NeighborStrategy::Exhaustive(_) => f.write_str("Exhaustive"),
        }
    }
}
