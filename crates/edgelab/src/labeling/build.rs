//! Line-graph construction and constraint preprocessing.

use std::collections::BTreeSet;

use crate::error::LabelingError;

use super::types::{AllowedLabels, Edge, IndexedAllowed, LabelParams};

/// Line graph of an edge list: `direct[i]` holds edges sharing a vertex with
/// edge `i`, `square[i]` edges exactly one intermediate edge away.
///
/// Both are symmetric, never contain `i` itself, and `square[i]` is disjoint
/// from `direct[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineGraph {
    pub direct: Vec<Vec<usize>>,
    pub square: Vec<Vec<usize>>,
}

impl LineGraph {
    pub fn new(edges: &[Edge]) -> Self {
        let direct = build_adjacency(edges);
        let square = build_squared_adjacency(&direct);
        Self { direct, square }
    }

    pub fn edge_count(&self) -> usize {
        self.direct.len()
    }
}

/// Direct line-graph adjacency. O(n²) over edge pairs.
pub fn build_adjacency(edges: &[Edge]) -> Vec<Vec<usize>> {
    let n = edges.len();
    let mut adj = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if edges[i].shares_vertex(&edges[j]) {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
    }
    adj
}

/// Square of a line graph, minus the direct neighbours and self.
pub fn build_squared_adjacency(direct: &[Vec<usize>]) -> Vec<Vec<usize>> {
    direct
        .iter()
        .enumerate()
        .map(|(l, adj)| {
            let mut seen = BTreeSet::new();
            let mut out = Vec::new();
            for &i in adj {
                for &j in &direct[i] {
                    if j != l && !adj.contains(&j) && seen.insert(j) {
                        out.push(j);
                    }
                }
            }
            out
        })
        .collect()
}

/// Reject self-loops; everything else about the edge list is accepted as is.
pub fn validate_edges(edges: &[Edge]) -> Result<(), LabelingError> {
    match edges.iter().enumerate().find(|(_, e)| e.is_loop()) {
        Some((index, &edge)) => Err(LabelingError::SelfLoop { index, edge }),
        None => Ok(()),
    }
}

/// Position of `edge` in the list, matching either orientation. The first
/// occurrence wins when the list holds duplicates.
pub fn edge_index(edges: &[Edge], edge: Edge) -> Result<usize, LabelingError> {
    edges
        .iter()
        .position(|e| e.same_endpoints(&edge))
        .ok_or(LabelingError::UnknownEdge { edge })
}

/// Translate edge-keyed constraints into index-keyed ones, checking that every
/// key is present and every allowed label lies in `0..k`.
pub fn index_allowed(
    edges: &[Edge],
    params: LabelParams,
    allowed: &AllowedLabels,
) -> Result<IndexedAllowed, LabelingError> {
    let mut out = IndexedAllowed::new();
    for (&edge, labels) in allowed {
        if let Some(&bad) = labels.iter().find(|&&l| l >= params.k) {
            return Err(LabelingError::invalid(format!(
                "label {bad} allowed on {edge} is outside 0..{}",
                params.k
            )));
        }
        let idx = edge_index(edges, edge)?;
        // Two keys naming the same edge in opposite orientations: keep only
        // labels allowed by both.
        out.entry(idx)
            .and_modify(|cur: &mut BTreeSet<usize>| cur.retain(|l| labels.contains(l)))
            .or_insert_with(|| labels.clone());
    }
    Ok(out)
}

/// Validate a query and derive everything the search needs from it.
pub fn prepare(
    edges: &[Edge],
    params: LabelParams,
    allowed: &AllowedLabels,
) -> Result<(LineGraph, IndexedAllowed), LabelingError> {
    params.validate()?;
    validate_edges(edges)?;
    let indexed = index_allowed(edges, params, allowed)?;
    Ok((LineGraph::new(edges), indexed))
}
