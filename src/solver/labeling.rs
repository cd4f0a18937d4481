//! Stage-wise label-correcting planner.
//!
//! # Algorithm
//!
//! Stage `i` holds the feasible arrangements reachable immediately after
//! stop `i`, each labeled with its best cumulative reload cost and best
//! predecessor. Stage 0 is the empty carrier at cost 0. Each stop expands
//! the prior stage's arrangements into feasibility-checked candidates and
//! relaxes labels with strictly-cheaper updates; prior arrangements are
//! visited in ascending cost order so most relaxations are settled early.
//! After the last stop the empty carrier must be reachable again; the plan
//! is reconstructed by walking best predecessors back to stage 0.
//!
//! A stop where no candidate survives the feasibility check, or a final
//! stage that misses the empty carrier, ends the run as infeasible. Both
//! are normal reportable outcomes, not errors.

use std::time::Instant;
use tracing::{debug, info};

use crate::cost::reload_cost;
use crate::error::PlanningError;
use crate::feasibility::FeasibilityChecker;
use crate::models::{Arrangement, AutomobileId, LoadingProblem, StopAction};
use crate::neighbors::{dropoff_candidates, pickup_candidates, NeighborStrategy};

use super::report::SolveReport;
use super::stage::StageLabels;

enum Outcome {
    Solved {
        total: u32,
        plan: Vec<Arrangement>,
        per_stop: Vec<u32>,
    },
    InfeasibleAtStop {
        stop: usize,
        action: StopAction,
        automobile: AutomobileId,
    },
    UnreachableTerminal {
        last_stage: usize,
    },
}

/// Minimum-reload load planner over a fixed stop route.
///
/// Owns the problem and the growing per-stage label collection; stages are
/// appended in route order and kept after the run for read-only inspection
/// (plan backtracking, stage graph rendering).
///
/// # Examples
///
/// ```
/// use u_loading::models::{ConstraintSet, LoadingProblem, Route, Stop, TypeMap};
/// use u_loading::solver::LoadingPlanner;
///
/// let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
/// let route = Route::from_stops(vec![
///     Stop::pickup(1),
///     Stop::pickup(2),
///     Stop::dropoff(2),
///     Stop::dropoff(1),
/// ]);
/// let problem =
///     LoadingProblem::new(route, ConstraintSet::new(), types, vec![1, 2, 3, 4, 5]).unwrap();
///
/// let mut planner = LoadingPlanner::new(problem);
/// let report = planner.run();
/// assert!(report.feasible());
/// assert_eq!(report.total_reloads(), Some(0));
/// assert_eq!(report.plan().unwrap().len(), 5);
/// ```
pub struct LoadingPlanner {
    problem: LoadingProblem,
    strategy: NeighborStrategy,
    verbose: bool,
    record_all_edges: bool,
    stage_cap: Option<usize>,
    stages: Vec<StageLabels>,
    report: Option<SolveReport>,
}

impl LoadingPlanner {
    /// Creates a planner using the local-mutation neighbor strategy.
    pub fn new(problem: LoadingProblem) -> Self {
        Self {
            problem,
            strategy: NeighborStrategy::default(),
            verbose: false,
            record_all_edges: false,
            stage_cap: None,
            stages: Vec::new(),
            report: None,
        }
    }

    /// Sets the neighbor-generation strategy.
    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Promotes run summaries to info-level log events. No effect on
    /// results.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Keeps every (predecessor, edge cost) pair per stage for read-only
    /// consumers. No effect on results.
    pub fn with_edge_recording(mut self, record: bool) -> Self {
        self.record_all_edges = record;
        self
    }

    /// Bounds each stage to the `cap` cheapest arrangements.
    ///
    /// Truncation is deterministic but prunes the search space, so the
    /// planner may return a suboptimal total or miss a feasible plan when
    /// the cap is tight.
    pub fn with_stage_cap(mut self, cap: usize) -> Self {
        self.stage_cap = Some(cap);
        self
    }

    /// The problem being solved.
    pub fn problem(&self) -> &LoadingProblem {
        &self.problem
    }

    /// The per-stage label collection, one entry per processed stage.
    ///
    /// Read-only; populated by [`run`](Self::run). Stage 0 is the state
    /// before the route begins.
    pub fn stages(&self) -> &[StageLabels] {
        &self.stages
    }

    /// Executes the planning run and returns the report.
    ///
    /// Running again re-solves from scratch and replaces the prior stages
    /// and report.
    pub fn run(&mut self) -> &SolveReport {
        let started = Instant::now();
        let outcome = self.solve();
        let elapsed = started.elapsed();

        let report = match outcome {
            Outcome::Solved {
                total,
                plan,
                per_stop,
            } => {
                if self.verbose {
                    info!(total_reloads = total, stops = per_stop.len(), "loading plan found");
                }
                SolveReport::solved(elapsed, total, plan, per_stop)
            }
            Outcome::InfeasibleAtStop {
                stop,
                action,
                automobile,
            } => {
                let message = format!(
                    "no feasible arrangement at stop {} ({action} automobile {automobile})",
                    stop + 1
                );
                if self.verbose {
                    info!(stop = stop + 1, "run infeasible: {message}");
                }
                SolveReport::infeasible(elapsed, message)
            }
            Outcome::UnreachableTerminal { last_stage } => {
                let message = format!(
                    "the empty carrier is unreachable at the final stage; last reached stage {last_stage}"
                );
                if self.verbose {
                    info!(last_stage, "run infeasible: {message}");
                }
                SolveReport::infeasible(elapsed, message)
            }
        };

        self.report.insert(report)
    }

    /// The report of the last run.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningError::NotRun`] if [`run`](Self::run) has not been
    /// called yet.
    pub fn report(&self) -> Result<&SolveReport, PlanningError> {
        self.report.as_ref().ok_or(PlanningError::NotRun)
    }

    fn solve(&mut self) -> Outcome {
        let slot_count = self.problem.slot_count();
        self.stages.clear();

        let mut start = StageLabels::new(self.record_all_edges);
        start.insert_start(Arrangement::empty(slot_count));
        self.stages.push(start);

        let checker = FeasibilityChecker::new(
            self.problem.constraints(),
            self.problem.types(),
            self.problem.slot_ids(),
        );

        for (index, &stop) in self.problem.route().stops().iter().enumerate() {
            let mut next = StageLabels::new(self.record_all_edges);
            let prior_stage = &self.stages[index];

            match &self.strategy {
                NeighborStrategy::LocalMutation => {
                    for (prior, label) in prior_stage.priors_by_cost() {
                        let candidates = match stop.action {
                            StopAction::Pickup => pickup_candidates(prior, stop.automobile),
                            StopAction::Dropoff => dropoff_candidates(prior, stop.automobile),
                        };
                        for candidate in candidates {
                            if checker.is_feasible(&candidate) {
                                relax_edge(
                                    &mut next,
                                    &candidate,
                                    prior,
                                    label.cost(),
                                    self.record_all_edges,
                                );
                            }
                        }
                    }
                }
                NeighborStrategy::Exhaustive(enumerator) => {
                    let loaded = self.problem.loaded_after(index + 1);
                    let loaded_types = self.problem.types().subset(loaded);
                    let candidates: Vec<Arrangement> = enumerator
                        .enumerate_feasible(
                            &loaded_types,
                            self.problem.slot_ids(),
                            self.problem.constraints(),
                        )
                        .into_iter()
                        .filter(|candidate| checker.is_feasible(candidate))
                        .collect();
                    for (prior, label) in prior_stage.priors_by_cost() {
                        for candidate in &candidates {
                            relax_edge(
                                &mut next,
                                candidate,
                                prior,
                                label.cost(),
                                self.record_all_edges,
                            );
                        }
                    }
                }
            }

            if next.is_empty() {
                debug!(
                    stop = index + 1,
                    automobile = stop.automobile,
                    "no feasible arrangement survives this stop"
                );
                return Outcome::InfeasibleAtStop {
                    stop: index,
                    action: stop.action,
                    automobile: stop.automobile,
                };
            }
            if let Some(cap) = self.stage_cap {
                next.truncate_to(cap);
            }
            debug!(stage = index + 1, arrangements = next.len(), "stage labels settled");
            self.stages.push(next);
        }

        let stop_count = self.problem.route().len();
        let terminal = Arrangement::empty(slot_count);
        let Some(terminal_label) = self.stages[stop_count].get(&terminal).cloned() else {
            return Outcome::UnreachableTerminal {
                last_stage: stop_count,
            };
        };

        let total = terminal_label.cost();
        let mut plan = Vec::with_capacity(stop_count + 1);
        let mut per_stop = Vec::with_capacity(stop_count);
        let mut current = terminal;
        plan.push(current.clone());
        for stage_index in (1..=stop_count).rev() {
            let Some(label) = self.stages[stage_index].get(&current) else {
                break;
            };
            per_stop.push(label.edge_cost().unwrap_or(0));
            let Some(predecessor) = label.predecessor() else {
                break;
            };
            plan.push(predecessor.clone());
            current = predecessor.clone();
        }
        plan.reverse();
        per_stop.reverse();
        debug_assert_eq!(plan.len(), stop_count + 1);
        debug_assert_eq!(per_stop.iter().sum::<u32>(), total);

        Outcome::Solved {
            total,
            plan,
            per_stop,
        }
    }
}

/// Relaxes one (prior, candidate) edge into the next stage.
///
/// A prior whose cost already matches or exceeds the candidate's best label
/// cannot improve it, so the reload computation is skipped; with edge
/// recording enabled every pair is computed and kept.
fn relax_edge(
    next: &mut StageLabels,
    candidate: &Arrangement,
    prior: &Arrangement,
    prior_cost: u32,
    record_all_edges: bool,
) {
    if !record_all_edges {
        if let Some(best) = next.best_cost(candidate) {
            if prior_cost >= best {
                return;
            }
        }
    }
    let edge = reload_cost(prior, candidate);
    next.relax(candidate, prior, prior_cost, edge);
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    use crate::models::{ConstraintSet, Route, SlotId, Stop, TypeMap, EMPTY};
    use crate::neighbors::ArrangementEnumerator;

    /// Places every loaded automobile into every distinct slot selection,
    /// filtering by feasibility. Trivial reference implementation for the
    /// exhaustive strategy.
    struct BruteForceEnumerator;

    impl ArrangementEnumerator for BruteForceEnumerator {
        fn enumerate_feasible(
            &self,
            loaded: &TypeMap,
            slots: &[SlotId],
            constraints: &ConstraintSet,
        ) -> Vec<Arrangement> {
            let mut ids: Vec<AutomobileId> = loaded.ids().collect();
            ids.sort_unstable();
            let checker = FeasibilityChecker::new(constraints, loaded, slots);
            let mut out = Vec::new();
            for positions in (0..slots.len()).permutations(ids.len()) {
                let mut contents = vec![EMPTY; slots.len()];
                for (&position, &id) in positions.iter().zip(ids.iter()) {
                    contents[position] = id;
                }
                let arrangement = Arrangement::from_slots(contents);
                if checker.is_feasible(&arrangement) {
                    out.push(arrangement);
                }
            }
            out
        }
    }

    fn sample_types() -> TypeMap {
        [(1, "T1"), (2, "T2"), (3, "T1"), (4, "T1")]
            .into_iter()
            .collect()
    }

    fn sample_constraints() -> ConstraintSet {
        let mut constraints = ConstraintSet::new();
        for (auto_type, slot) in [("T1", 2), ("T1", 4), ("T2", 3), ("T2", 5), ("T3", 1), ("T3", 2)]
        {
            constraints.add_forbidden(auto_type, slot);
        }
        for (type_a, slot_a, type_b, slot_b) in [
            ("T3", 3, "T1", 2),
            ("T1", 2, "T3", 3),
            ("T3", 2, "T1", 3),
            ("T1", 3, "T3", 2),
            ("T3", 4, "T2", 3),
            ("T2", 3, "T3", 4),
            ("T3", 3, "T2", 4),
            ("T2", 4, "T3", 3),
            ("T3", 4, "T3", 3),
            ("T3", 3, "T3", 4),
        ] {
            constraints.add_exclusion(type_a, slot_a, type_b, slot_b);
        }
        constraints
    }

    fn sample_route() -> Route {
        Route::from_stops(vec![
            Stop::pickup(1),
            Stop::pickup(2),
            Stop::pickup(3),
            Stop::pickup(4),
            Stop::dropoff(1),
            Stop::dropoff(2),
            Stop::dropoff(3),
            Stop::dropoff(4),
        ])
    }

    fn sample_problem() -> LoadingProblem {
        LoadingProblem::new(
            sample_route(),
            sample_constraints(),
            sample_types(),
            vec![1, 2, 3, 4, 5],
        )
        .unwrap()
    }

    fn two_car_problem(stops: Vec<Stop>) -> LoadingProblem {
        let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
        LoadingProblem::new(
            Route::from_stops(stops),
            ConstraintSet::new(),
            types,
            vec![1, 2, 3, 4, 5],
        )
        .unwrap()
    }

    fn assert_plan_invariants(planner: &LoadingPlanner, report: &SolveReport) {
        let plan = report.plan().unwrap();
        let per_stop = report.per_stop_reloads().unwrap();
        let stop_count = planner.problem().route().len();
        let slot_count = planner.problem().slot_count();

        assert_eq!(plan.len(), stop_count + 1);
        assert_eq!(per_stop.len(), stop_count);
        assert_eq!(plan[0], Arrangement::empty(slot_count));
        assert_eq!(plan[plan.len() - 1], Arrangement::empty(slot_count));
        assert_eq!(
            per_stop.iter().sum::<u32>(),
            report.total_reloads().unwrap()
        );

        let checker = FeasibilityChecker::new(
            planner.problem().constraints(),
            planner.problem().types(),
            planner.problem().slot_ids(),
        );
        for arrangement in plan {
            assert!(checker.is_feasible(arrangement));
        }
        for (i, (from, to)) in plan.iter().zip(plan.iter().skip(1)).enumerate() {
            assert_eq!(reload_cost(from, to), per_stop[i]);
        }
    }

    #[test]
    fn test_report_before_run_is_an_error() {
        let planner = LoadingPlanner::new(sample_problem());
        assert_eq!(planner.report().unwrap_err(), PlanningError::NotRun);
    }

    #[test]
    fn test_sample_scenario_is_feasible() {
        let mut planner = LoadingPlanner::new(sample_problem());
        let report = planner.run().clone();
        assert!(report.feasible());
        assert!(report.message().is_empty());
        assert_eq!(report.plan().unwrap().len(), 9);
        // Serving the first-loaded automobile first forces the other three
        // out of the way exactly once.
        assert_eq!(report.total_reloads(), Some(3));
        assert_plan_invariants(&planner, &report);
        // Stage 0 through stage 8 are all kept for inspection.
        assert_eq!(planner.stages().len(), 9);
        // Each stage exposes its labels; the plan arrangement at stage i is
        // labeled with the prefix sum of the per-stop reloads.
        let plan = report.plan().unwrap();
        let per_stop = report.per_stop_reloads().unwrap();
        let mut prefix = 0;
        for (i, stage) in planner.stages().iter().enumerate() {
            assert!(stage.labels().count() > 0);
            if i > 0 {
                prefix += per_stop[i - 1];
            }
            assert_eq!(stage.get(&plan[i]).unwrap().cost(), prefix);
        }
    }

    #[test]
    fn test_unconstrained_lifo_route_needs_no_reloads() {
        let problem = two_car_problem(vec![
            Stop::pickup(1),
            Stop::pickup(2),
            Stop::dropoff(2),
            Stop::dropoff(1),
        ]);
        let mut planner = LoadingPlanner::new(problem);
        let report = planner.run().clone();
        assert!(report.feasible());
        assert_eq!(report.total_reloads(), Some(0));
        assert_eq!(report.per_stop_reloads(), Some([0, 0, 0, 0].as_slice()));
        assert_plan_invariants(&planner, &report);
    }

    #[test]
    fn test_unconstrained_fifo_route_costs_one_reload() {
        // Dropping the first-loaded automobile first forces exactly one
        // automobile out of the way, whichever slots are chosen.
        let problem = two_car_problem(vec![
            Stop::pickup(1),
            Stop::pickup(2),
            Stop::dropoff(1),
            Stop::dropoff(2),
        ]);
        let mut planner = LoadingPlanner::new(problem);
        let report = planner.run().clone();
        assert!(report.feasible());
        assert_eq!(report.total_reloads(), Some(1));
        assert_plan_invariants(&planner, &report);
    }

    #[test]
    fn test_forbidding_every_slot_is_infeasible_at_first_pickup() {
        let mut constraints = ConstraintSet::new();
        for slot in 1..=5 {
            constraints.add_forbidden("T1", slot);
            constraints.add_forbidden("T2", slot);
        }
        let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
        let problem = LoadingProblem::new(
            Route::from_stops(vec![
                Stop::pickup(1),
                Stop::pickup(2),
                Stop::dropoff(1),
                Stop::dropoff(2),
            ]),
            constraints,
            types,
            vec![1, 2, 3, 4, 5],
        )
        .unwrap();

        let mut planner = LoadingPlanner::new(problem);
        let report = planner.run();
        assert!(!report.feasible());
        assert_eq!(report.total_reloads(), None);
        assert_eq!(report.plan(), None);
        assert_eq!(
            report.message(),
            "no feasible arrangement at stop 1 (pickup automobile 1)"
        );
    }

    #[test]
    fn test_empty_route_is_trivially_feasible() {
        let types: TypeMap = [(1, "T1")].into_iter().collect();
        let problem =
            LoadingProblem::new(Route::new(), ConstraintSet::new(), types, vec![1, 2, 3]).unwrap();
        let mut planner = LoadingPlanner::new(problem);
        let report = planner.run();
        assert!(report.feasible());
        assert_eq!(report.total_reloads(), Some(0));
        assert_eq!(report.plan(), Some([Arrangement::empty(3)].as_slice()));
        assert_eq!(report.per_stop_reloads(), Some([].as_slice()));
    }

    #[test]
    fn test_strategies_agree_on_sample_scenario() {
        let mut mutation = LoadingPlanner::new(sample_problem());
        let mutation_total = mutation.run().total_reloads();

        let mut exhaustive = LoadingPlanner::new(sample_problem())
            .with_strategy(NeighborStrategy::Exhaustive(Box::new(BruteForceEnumerator)));
        let exhaustive_total = exhaustive.run().total_reloads();

        assert!(mutation_total.is_some());
        assert_eq!(mutation_total, exhaustive_total);
    }

    #[test]
    fn test_strategies_agree_on_unconstrained_routes() {
        for stops in [
            vec![
                Stop::pickup(1),
                Stop::pickup(2),
                Stop::dropoff(2),
                Stop::dropoff(1),
            ],
            vec![
                Stop::pickup(1),
                Stop::pickup(2),
                Stop::dropoff(1),
                Stop::dropoff(2),
            ],
        ] {
            let mut mutation = LoadingPlanner::new(two_car_problem(stops.clone()));
            let mut exhaustive = LoadingPlanner::new(two_car_problem(stops))
                .with_strategy(NeighborStrategy::Exhaustive(Box::new(BruteForceEnumerator)));
            assert_eq!(
                mutation.run().total_reloads(),
                exhaustive.run().total_reloads()
            );
        }
    }

    #[test]
    fn test_enumerator_places_exactly_the_loaded_set() {
        let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
        let slots = vec![1, 2, 3];
        let arrangements =
            BruteForceEnumerator.enumerate_feasible(&types, &slots, &ConstraintSet::new());
        // Two automobiles over three slots: 3 * 2 ordered placements.
        assert_eq!(arrangements.len(), 6);
        for arrangement in arrangements {
            assert_eq!(arrangement.occupied_count(), 2);
            assert!(arrangement.position_of(1).is_some());
            assert!(arrangement.position_of(2).is_some());
        }
    }

    #[test]
    fn test_edge_recording_populates_stage_edges() {
        let problem = two_car_problem(vec![
            Stop::pickup(1),
            Stop::pickup(2),
            Stop::dropoff(2),
            Stop::dropoff(1),
        ]);
        let mut planner = LoadingPlanner::new(problem).with_edge_recording(true);
        planner.run();

        let first_stage = &planner.stages()[1];
        let edges = first_stage.all_edges().unwrap();
        assert_eq!(edges.len(), first_stage.len());
        let start = Arrangement::empty(5);
        for (arrangement, incoming) in edges {
            assert!(first_stage.contains(arrangement));
            assert_eq!(incoming.len(), 1);
            assert_eq!(incoming[0].0, start);
        }
    }

    #[test]
    fn test_edge_recording_off_by_default() {
        let problem = two_car_problem(vec![Stop::pickup(1), Stop::dropoff(1)]);
        let mut planner = LoadingPlanner::new(problem);
        planner.run();
        assert!(planner.stages()[1].all_edges().is_none());
    }

    #[test]
    fn test_stage_cap_bounds_stage_size() {
        let problem = two_car_problem(vec![
            Stop::pickup(1),
            Stop::pickup(2),
            Stop::dropoff(2),
            Stop::dropoff(1),
        ]);
        let mut planner = LoadingPlanner::new(problem).with_stage_cap(1);
        let report = planner.run().clone();
        assert!(report.feasible());
        assert_eq!(report.total_reloads(), Some(0));
        for stage in planner.stages().iter().skip(1) {
            assert!(stage.len() <= 1);
        }
    }

    #[test]
    fn test_rerun_replaces_previous_result() {
        let mut planner = LoadingPlanner::new(sample_problem());
        let first = planner.run().clone();
        let second = planner.run().clone();
        assert_eq!(first.total_reloads(), second.total_reloads());
        assert_eq!(first.plan(), second.plan());
        assert_eq!(planner.stages().len(), 9);
    }
}
