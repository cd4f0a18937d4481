//! Domain model types for auto-carrier load planning.
//!
//! Provides the core abstractions: arrangements of automobiles across the
//! carrier's slots, the three placement constraint families, pickup/dropoff
//! routes, the automobile type map, and a problem type that ties everything
//! together with fail-fast input validation.

mod arrangement;
mod constraints;
mod fleet;
mod problem;
mod route;

pub use arrangement::{Arrangement, AutomobileId, SlotId, EMPTY};
pub use constraints::{ConstraintSet, ForbiddenSlot, PairedSlots, PairwiseExclusion};
pub use fleet::TypeMap;
pub use problem::LoadingProblem;
pub use route::{Route, Stop, StopAction};
