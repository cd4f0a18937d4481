//! Per-stage label bookkeeping.

use rustc_hash::FxHashMap;

use crate::models::Arrangement;

/// Best-known way to reach an arrangement within a stage.
///
/// Holds the cumulative reload cost from the start of the route, the best
/// predecessor arrangement in the prior stage, and the incremental reload
/// cost of the edge from that predecessor. The start arrangement of stage 0
/// has no predecessor and no edge cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    cost: u32,
    predecessor: Option<Arrangement>,
    edge_cost: Option<u32>,
}

impl Label {
    pub(crate) fn start() -> Self {
        Self {
            cost: 0,
            predecessor: None,
            edge_cost: None,
        }
    }

    /// Cumulative reload cost from the start of the route.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Best predecessor arrangement in the prior stage.
    pub fn predecessor(&self) -> Option<&Arrangement> {
        self.predecessor.as_ref()
    }

    /// Reload cost of the edge from the best predecessor.
    pub fn edge_cost(&self) -> Option<u32> {
        self.edge_cost
    }
}

/// The arrangements reachable at one stage, each with its best label.
///
/// Absence from the map is the unreachable sentinel: an arrangement only
/// appears once a finite-cost path to it has been found. When edge
/// recording is enabled, every (predecessor, edge cost) pair considered
/// during relaxation is kept in an auxiliary map, separate from the
/// authoritative single-best label, for read-only consumers such as stage
/// graph visualization.
#[derive(Debug, Clone, Default)]
pub struct StageLabels {
    labels: FxHashMap<Arrangement, Label>,
    edges: Option<FxHashMap<Arrangement, Vec<(Arrangement, u32)>>>,
}

impl StageLabels {
    pub(crate) fn new(record_edges: bool) -> Self {
        Self {
            labels: FxHashMap::default(),
            edges: record_edges.then(FxHashMap::default),
        }
    }

    pub(crate) fn insert_start(&mut self, arrangement: Arrangement) {
        self.labels.insert(arrangement, Label::start());
    }

    /// Label of `arrangement`, if it is reachable at this stage.
    pub fn get(&self, arrangement: &Arrangement) -> Option<&Label> {
        self.labels.get(arrangement)
    }

    /// Returns `true` if `arrangement` is reachable at this stage.
    pub fn contains(&self, arrangement: &Arrangement) -> bool {
        self.labels.contains_key(arrangement)
    }

    /// Number of reachable arrangements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no arrangement is reachable.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All reachable arrangements with their labels, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = (&Arrangement, &Label)> {
        self.labels.iter()
    }

    /// Every (predecessor, edge cost) pair considered per arrangement, when
    /// edge recording was enabled for the run.
    pub fn all_edges(&self) -> Option<&FxHashMap<Arrangement, Vec<(Arrangement, u32)>>> {
        self.edges.as_ref()
    }

    /// Best-known cost of `arrangement` at this stage.
    pub(crate) fn best_cost(&self, arrangement: &Arrangement) -> Option<u32> {
        self.labels.get(arrangement).map(Label::cost)
    }

    /// Arrangements in ascending cost order, ties broken by slot contents.
    pub(crate) fn priors_by_cost(&self) -> Vec<(&Arrangement, &Label)> {
        let mut priors: Vec<_> = self.labels.iter().collect();
        priors.sort_by(|(a, la), (b, lb)| la.cost.cmp(&lb.cost).then_with(|| a.cmp(b)));
        priors
    }

    /// Records the edge when enabled, then updates the label if the path
    /// through `prior` is strictly cheaper. Ties keep the earlier label.
    pub(crate) fn relax(
        &mut self,
        candidate: &Arrangement,
        prior: &Arrangement,
        prior_cost: u32,
        edge_cost: u32,
    ) -> bool {
        if let Some(edges) = &mut self.edges {
            edges
                .entry(candidate.clone())
                .or_default()
                .push((prior.clone(), edge_cost));
        }

        let total = prior_cost + edge_cost;
        let improves = match self.labels.get(candidate) {
            Some(existing) => total < existing.cost,
            None => true,
        };
        if improves {
            self.labels.insert(
                candidate.clone(),
                Label {
                    cost: total,
                    predecessor: Some(prior.clone()),
                    edge_cost: Some(edge_cost),
                },
            );
        }
        improves
    }

    /// Keeps only the `cap` cheapest labels, ties broken by slot contents.
    pub(crate) fn truncate_to(&mut self, cap: usize) {
        if self.labels.len() <= cap {
            return;
        }
        let mut entries: Vec<(Arrangement, Label)> = self.labels.drain().collect();
        entries.sort_by(|(a, la), (b, lb)| la.cost.cmp(&lb.cost).then_with(|| a.cmp(b)));
        entries.truncate(cap);
        self.labels = entries.into_iter().collect();
        if let Some(edges) = &mut self.edges {
            let kept = &self.labels;
            edges.retain(|arrangement, _| kept.contains_key(arrangement));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrangement(slots: &[u32]) -> Arrangement {
        Arrangement::from_slots(slots.to_vec())
    }

    #[test]
    fn test_start_label() {
        let label = Label::start();
        assert_eq!(label.cost(), 0);
        assert!(label.predecessor().is_none());
        assert!(label.edge_cost().is_none());
    }

    #[test]
    fn test_relax_improves_and_keeps_first_on_tie() {
        let mut stage = StageLabels::new(false);
        let candidate = arrangement(&[0, 1]);
        let prior_a = arrangement(&[0, 0]);
        let prior_b = arrangement(&[1, 0]);

        assert!(stage.relax(&candidate, &prior_a, 0, 2));
        assert_eq!(stage.best_cost(&candidate), Some(2));

        // Equal total: first-found predecessor is kept.
        assert!(!stage.relax(&candidate, &prior_b, 1, 1));
        assert_eq!(stage.get(&candidate).unwrap().predecessor(), Some(&prior_a));

        // Strictly cheaper: label is replaced.
        assert!(stage.relax(&candidate, &prior_b, 0, 1));
        let label = stage.get(&candidate).unwrap();
        assert_eq!(label.cost(), 1);
        assert_eq!(label.predecessor(), Some(&prior_b));
        assert_eq!(label.edge_cost(), Some(1));
    }

    #[test]
    fn test_priors_by_cost_is_sorted() {
        let mut stage = StageLabels::new(false);
        let prior = arrangement(&[0, 0]);
        stage.relax(&arrangement(&[2, 0]), &prior, 0, 3);
        stage.relax(&arrangement(&[0, 2]), &prior, 0, 1);
        stage.relax(&arrangement(&[2, 2]), &prior, 0, 2);

        let costs: Vec<u32> = stage
            .priors_by_cost()
            .iter()
            .map(|(_, label)| label.cost())
            .collect();
        assert_eq!(costs, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_recording_keeps_all_pairs() {
        let mut stage = StageLabels::new(true);
        let candidate = arrangement(&[0, 1]);
        let prior_a = arrangement(&[0, 0]);
        let prior_b = arrangement(&[1, 0]);

        stage.relax(&candidate, &prior_a, 0, 2);
        stage.relax(&candidate, &prior_b, 5, 1);

        let edges = stage.all_edges().unwrap();
        let recorded = &edges[&candidate];
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], (prior_a, 2));
        assert_eq!(recorded[1], (prior_b, 1));
    }

    #[test]
    fn test_truncate_keeps_cheapest() {
        let mut stage = StageLabels::new(false);
        let prior = arrangement(&[0, 0]);
        stage.relax(&arrangement(&[1, 0]), &prior, 0, 5);
        stage.relax(&arrangement(&[0, 1]), &prior, 0, 1);
        stage.relax(&arrangement(&[1, 1]), &prior, 0, 3);

        stage.truncate_to(2);
        assert_eq!(stage.len(), 2);
        assert!(stage.contains(&arrangement(&[0, 1])));
        assert!(stage.contains(&arrangement(&[1, 1])));
        assert!(!stage.contains(&arrangement(&[1, 0])));
    }
}
