//! Conditional range query: how the labels of one edge depend on another.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::LabelingError;

use super::build::{edge_index, prepare};
use super::dfs::search;
use super::project::project;
use super::types::{AllowedLabels, Edge, IndexedAllowed, Label, LabelParams, LabelSet};

/// For every label `i` of `fixed`, the labels `interest` can take once `fixed`
/// is pinned to `i`. Labels of `fixed` that admit no labeling at all are left
/// out of the map.
///
/// Runs one unreduced search per label of `fixed`; the searches are
/// independent and run on the rayon pool.
pub fn range_branch(
    edges: &[Edge],
    params: LabelParams,
    fixed: Edge,
    interest: Edge,
) -> Result<BTreeMap<Label, LabelSet>, LabelingError> {
    let (graph, _) = prepare(edges, params, &AllowedLabels::new())?;
    let fixed_idx = edge_index(edges, fixed)?;
    let interest_idx = edge_index(edges, interest)?;

    let out = (0..params.k)
        .into_par_iter()
        .filter_map(|label| {
            let pin = IndexedAllowed::from([(fixed_idx, LabelSet::from([label]))]);
            let solutions = search(&graph, params, &pin);
            let mut table = project(edges, &solutions);
            let possible = std::mem::take(&mut table[interest_idx]);
            tracing::trace!(label, solutions = solutions.len(), "range branch");
            (!possible.is_empty()).then_some((label, possible))
        })
        .collect();
    Ok(out)
}
