//! # u-loading
//!
//! Auto-carrier load planning library. Computes minimum-reload loading and
//! unloading plans for a single-level auto-carrier serving a fixed
//! pickup/dropoff route, where every intermediate arrangement of automobiles
//! across the carrier's slots must satisfy placement constraints.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Arrangement, ConstraintSet, Route, TypeMap, LoadingProblem)
//! - [`feasibility`]: Arrangement feasibility checking against placement constraints
//! - [`cost`]: Reload-cost metric between consecutive arrangements
//! - [`neighbors`]: Candidate next-arrangement generation (local mutation, exhaustive enumeration)
//! - [`solver`]: Stage-wise label-correcting planner and solve reports
//! - [`error`]: Input validation and usage errors

pub mod cost;
pub mod error;
pub mod feasibility;
pub mod models;
pub mod neighbors;
pub mod solver;
