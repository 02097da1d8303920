//! Data types for edge lists, labelings and search configuration.
//!
//! Kept small and explicit to make `build`, `dfs` and `project` easy to read.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::LabelingError;

/// A label in `0..k`.
pub type Label = usize;

/// One complete labeling, positionally aligned with the edge list.
pub type Labeling = Vec<Label>;

pub type LabelSet = BTreeSet<Label>;

/// Per-edge label sets, positionally aligned with the edge list.
pub type PossibilityTable = Vec<LabelSet>;

/// Caller-facing constraints keyed by edge value.
pub type AllowedLabels = BTreeMap<Edge, LabelSet>;

/// Search-facing constraints keyed by edge index.
pub type IndexedAllowed = BTreeMap<usize, LabelSet>;

/// Undirected edge between two vertex ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self(u, v)
    }

    /// True if both edges touch a common vertex.
    #[inline]
    pub fn shares_vertex(&self, other: &Edge) -> bool {
        self.0 == other.0 || self.0 == other.1 || self.1 == other.0 || self.1 == other.1
    }

    /// Same endpoints, in either orientation.
    #[inline]
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self(u, v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// L(a,b)-k parameters: adjacent edges differ by at least `a`, edges at
/// distance two by at least `b`, labels drawn from `0..k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelParams {
    pub a: usize,
    pub b: usize,
    pub k: usize,
}

impl LabelParams {
    pub fn new(a: usize, b: usize, k: usize) -> Self {
        Self { a, b, k }
    }

    pub fn validate(&self) -> Result<(), LabelingError> {
        if self.k == 0 {
            return Err(LabelingError::invalid("k must be >= 1"));
        }
        Ok(())
    }

    /// Largest label kept on the pivot edge by symmetry reduction. Zero for
    /// an unvalidated `k = 0`.
    #[inline]
    pub fn lower_half_max(&self) -> Label {
        self.k.saturating_sub(1) / 2
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Drop mirror-image labelings by pinning one pivot edge to the lower
    /// half of the label range. Ignored whenever constraints are supplied.
    pub remove_symmetry: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            remove_symmetry: true,
        }
    }
}

/// Counters collected by one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate (edge, label) pairs tried.
    pub nodes: u64,
    /// Candidates rejected by an allowed-label set or an adjacency check.
    pub pruned: u64,
    pub solutions: u64,
}

/// Render a label set as `{0, 1}`; the empty set is `{}`.
pub fn format_label_set(set: &LabelSet) -> String {
    let parts: Vec<String> = set.iter().map(|l| l.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}
