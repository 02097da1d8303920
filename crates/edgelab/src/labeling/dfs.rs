//! Depth‑first enumeration of every L(a,b)-k edge labeling.
//!
//! Edges are visited in list order and labels in ascending order at each edge.
//! A candidate survives if it is allowed for its edge and passes both the
//! direct (`a`) and squared (`b`) distance checks against already labeled
//! edges; survivors descend on a private copy of the assignment so sibling
//! branches never observe each other's tentative labels.

use crate::error::LabelingError;

use super::build::{prepare, LineGraph};
use super::check::satisfies;
use super::types::{AllowedLabels, Edge, IndexedAllowed, Label, LabelParams, Labeling, SearchStats};

/// All labelings of `edges` under `params` and the edge-keyed `allowed` map.
///
/// An empty result means no labeling exists; it is not an error.
pub fn labelings(
    edges: &[Edge],
    params: LabelParams,
    allowed: &AllowedLabels,
) -> Result<Vec<Labeling>, LabelingError> {
    let (graph, indexed) = prepare(edges, params, allowed)?;
    Ok(search(&graph, params, &indexed))
}

/// Run the search on a prebuilt line graph with index-keyed constraints.
///
/// `params` must already be validated (`k >= 1`).
pub fn search(graph: &LineGraph, params: LabelParams, allowed: &IndexedAllowed) -> Vec<Labeling> {
    search_with_stats(graph, params, allowed).0
}

/// Same as [`search`], also returning node/prune counters.
pub fn search_with_stats(
    graph: &LineGraph,
    params: LabelParams,
    allowed: &IndexedAllowed,
) -> (Vec<Labeling>, SearchStats) {
    let mut runner = DfsRunner::new(graph, params, allowed);
    runner.recur(0, vec![None; graph.edge_count()]);
    runner.stats.solutions = runner.solutions.len() as u64;
    tracing::debug!(
        edges = graph.edge_count(),
        a = params.a,
        b = params.b,
        k = params.k,
        constrained = allowed.len(),
        nodes = runner.stats.nodes,
        pruned = runner.stats.pruned,
        solutions = runner.stats.solutions,
        "labeling search done"
    );
    (runner.solutions, runner.stats)
}

/// DFS runner carrying shared context and accumulators.
struct DfsRunner<'a> {
    g: &'a LineGraph,
    params: LabelParams,
    allowed: &'a IndexedAllowed,
    solutions: Vec<Labeling>,
    stats: SearchStats,
}

impl<'a> DfsRunner<'a> {
    fn new(g: &'a LineGraph, params: LabelParams, allowed: &'a IndexedAllowed) -> Self {
        Self {
            g,
            params,
            allowed,
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn recur(&mut self, i: usize, mut assignment: Vec<Option<Label>>) {
        if i == self.g.edge_count() {
            debug_assert!(assignment.iter().all(Option::is_some));
            self.solutions.push(assignment.into_iter().flatten().collect());
            return;
        }
        let restriction = self.allowed.get(&i);
        for q in 0..self.params.k {
            self.stats.nodes += 1;
            assignment[i] = Some(q);
            if restriction.is_some_and(|set| !set.contains(&q)) {
                self.stats.pruned += 1;
                continue;
            }
            if satisfies(&self.g.direct, &assignment, self.params.a, i)
                && satisfies(&self.g.square, &assignment, self.params.b, i)
            {
                self.recur(i + 1, assignment.clone());
            } else {
                self.stats.pruned += 1;
            }
        }
    }
}
