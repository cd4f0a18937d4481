//! Input validation and usage errors.
//!
//! Infeasibility is not an error: an infeasible run still produces a
//! [`SolveReport`](crate::solver::SolveReport) with `feasible = false` and a
//! diagnostic message. The variants here cover caller bugs, which fail fast
//! before any stage processing, and the query-before-run usage error.

use thiserror::Error;

use crate::models::{AutomobileId, SlotId};

/// Errors raised by problem construction and planner usage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// The route references an automobile with no entry in the type map.
    #[error("automobile {automobile} appears in the route but has no type")]
    UnknownAutomobileType {
        /// The untyped automobile.
        automobile: AutomobileId,
    },

    /// An automobile id equal to the empty-slot sentinel appears in the route.
    #[error("automobile id 0 at stop {stop} is reserved for empty slots")]
    ReservedAutomobileId {
        /// Zero-based stop index.
        stop: usize,
    },

    /// An automobile is picked up more than once.
    #[error("automobile {automobile} is picked up again at stop {stop}")]
    DuplicatePickup {
        /// The automobile picked up twice.
        automobile: AutomobileId,
        /// Zero-based stop index of the second pickup.
        stop: usize,
    },

    /// An automobile is dropped off while not on board.
    #[error("automobile {automobile} is dropped off at stop {stop} but is not on board")]
    DropoffWithoutPickup {
        /// The automobile being dropped.
        automobile: AutomobileId,
        /// Zero-based stop index of the dropoff.
        stop: usize,
    },

    /// An automobile is still on board after the last stop.
    #[error("automobile {automobile} is still on board at the end of the route")]
    NeverDroppedOff {
        /// The automobile never dropped off.
        automobile: AutomobileId,
    },

    /// The slot list contains the same slot id twice.
    #[error("slot {slot} is listed more than once")]
    DuplicateSlot {
        /// The repeated slot id.
        slot: SlotId,
    },

    /// A constraint references a slot id that is not on the carrier.
    #[error("constraint references slot {slot}, which is not on the carrier")]
    UnknownConstraintSlot {
        /// The unknown slot id.
        slot: SlotId,
    },

    /// Results were requested before any run was executed.
    #[error("no run has been executed yet; call run() before reading results")]
    NotRun,
}
