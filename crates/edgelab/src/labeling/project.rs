//! Per-edge projection of a solution set, with optional symmetry reduction.
//!
//! Symmetry reduction is a fixed heuristic for gadgets with a global label
//! swap symmetry: pick the non-forced edge with the fewest possible labels
//! (first in edge order on ties) and keep only the labelings where that edge
//! sits in the lower half `0..=(k-1)/2`. It is not a general symmetry
//! detector. Constraints supplied by the caller already break the symmetry,
//! so reduction is skipped whenever any are present.

use crate::error::LabelingError;

use super::build::prepare;
use super::dfs::search;
use super::types::{AllowedLabels, Edge, LabelParams, LabelSet, Labeling, PossibilityTable, SearchCfg};

/// Union, per edge, of the labels it takes across `solutions`.
pub fn project(edges: &[Edge], solutions: &[Labeling]) -> PossibilityTable {
    project_iter(edges.len(), solutions.iter())
}

fn project_iter<'s>(n: usize, solutions: impl Iterator<Item = &'s Labeling>) -> PossibilityTable {
    let mut table = vec![LabelSet::new(); n];
    for s in solutions {
        for (set, &label) in table.iter_mut().zip(s) {
            set.insert(label);
        }
    }
    table
}

/// Edge used to break the label-swap symmetry: among edges with more than one
/// possible label, the one with the fewest (first in edge order on ties).
/// `None` when every edge is forced or the table is empty.
pub fn pivot_edge(table: &PossibilityTable) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .filter(|(_, set)| set.len() > 1)
        // min_by_key keeps the first of equal keys
        .min_by_key(|(_, set)| set.len())
        .map(|(i, _)| i)
}

/// Projection after discarding labelings with the pivot edge in the upper
/// half of the range. Falls back to the plain projection when there is no
/// pivot.
pub fn project_with_symmetry_reduction(
    edges: &[Edge],
    solutions: &[Labeling],
    params: LabelParams,
) -> PossibilityTable {
    let table = project(edges, solutions);
    let Some(pivot) = pivot_edge(&table) else {
        tracing::debug!("no symmetry pivot; projection left unreduced");
        return table;
    };
    let cut = params.lower_half_max();
    tracing::debug!(pivot, edge = %edges[pivot], max_label = cut, "symmetry pivot");
    project_iter(
        edges.len(),
        solutions.iter().filter(|s| s[pivot] <= cut),
    )
}

/// Possible labels of every edge, the full pipeline: validate, search,
/// project, and reduce symmetry when `cfg` asks for it and `allowed` is empty.
pub fn possibilities(
    edges: &[Edge],
    params: LabelParams,
    cfg: SearchCfg,
    allowed: &AllowedLabels,
) -> Result<PossibilityTable, LabelingError> {
    let (graph, indexed) = prepare(edges, params, allowed)?;
    let solutions = search(&graph, params, &indexed);
    if cfg.remove_symmetry && indexed.is_empty() {
        Ok(project_with_symmetry_reduction(edges, &solutions, params))
    } else {
        Ok(project(edges, &solutions))
    }
}
