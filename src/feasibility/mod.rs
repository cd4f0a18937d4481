//! Arrangement feasibility checking against placement constraints.
//!
//! Provides [`FeasibilityChecker`], a pure predicate over arrangements.

mod checker;

pub use checker::FeasibilityChecker;
