//! Solve report type.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::Arrangement;

/// The outcome of a planning run.
///
/// Infeasible runs are normal, reportable outcomes: `feasible` is `false`,
/// the plan fields are `None`, and `message` carries the diagnostic. For a
/// feasible run the plan spans every stage from the initial empty carrier
/// to the final empty carrier, and the per-stop reload counts sum to the
/// reported total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    feasible: bool,
    elapsed: Duration,
    total_reloads: Option<u32>,
    plan: Option<Vec<Arrangement>>,
    per_stop_reloads: Option<Vec<u32>>,
    message: String,
}

impl SolveReport {
    pub(crate) fn solved(
        elapsed: Duration,
        total_reloads: u32,
        plan: Vec<Arrangement>,
        per_stop_reloads: Vec<u32>,
    ) -> Self {
        Self {
            feasible: true,
            elapsed,
            total_reloads: Some(total_reloads),
            plan: Some(plan),
            per_stop_reloads: Some(per_stop_reloads),
            message: String::new(),
        }
    }

    pub(crate) fn infeasible(elapsed: Duration, message: String) -> Self {
        Self {
            feasible: false,
            elapsed,
            total_reloads: None,
            plan: None,
            per_stop_reloads: None,
            message,
        }
    }

    /// Whether a complete feasible plan was found.
    pub fn feasible(&self) -> bool {
        self.feasible
    }

    /// Wall-clock time spent solving.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Minimum total number of reloads, for a feasible run.
    pub fn total_reloads(&self) -> Option<u32> {
        self.total_reloads
    }

    /// The arrangement after each stage, from the initial empty carrier to
    /// the final empty carrier, for a feasible run.
    pub fn plan(&self) -> Option<&[Arrangement]> {
        self.plan.as_deref()
    }

    /// Reloads incurred at each stop, for a feasible run.
    pub fn per_stop_reloads(&self) -> Option<&[u32]> {
        self.per_stop_reloads.as_deref()
    }

    /// Diagnostic message; empty for a feasible run.
    pub fn message(&self) -> &str {
        &self.message
    }
}
