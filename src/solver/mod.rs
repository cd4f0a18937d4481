//! Stage-wise label-correcting planner and solve reports.
//!
//! - [`LoadingPlanner`]: drives the run, owns the per-stage labels
//! - [`StageLabels`] and [`Label`]: reachable arrangements per stage
//! - [`SolveReport`]: feasibility flag, plan, reload counts, timing

mod labeling;
mod report;
mod stage;

pub use labeling::LoadingPlanner;
pub use report::SolveReport;
pub use stage::{Label, StageLabels};
