//! Distance-constrained edge labelings: builders, exhaustive DFS, and the
//! analyses built on its solution set.
//!
//! Purpose
//! - Enumerate every L(a,b)-k edge labeling of a small graph: labels in `0..k`,
//!   edges sharing a vertex differ by at least `a`, edges one intermediate edge
//!   apart differ by at least `b`.
//! - Project the solution set onto per-edge label sets (optionally reducing a
//!   global label-swap symmetry) and answer "if edge e has label i, what can
//!   edge f take?" queries. These drive gadget construction for hardness
//!   reductions over labeling problems.
//!
//! Layout
//! - `types.rs` (data types), `build.rs` (line graph and its square, input
//!   validation), `check.rs` (local distance check), `dfs.rs` (search),
//!   `project.rs` (projection and symmetry reduction), `range.rs`
//!   (conditional range query).
//!
//! Notes
//! - The search is exponential in the edge count (k^n worst case) with only
//!   local pruning. Intended inputs are hand-built gadgets, typically under
//!   20 edges and k under 5.
//! - Every query reruns the search from scratch.

mod build;
mod check;
mod dfs;
mod project;
mod range;
mod types;

pub use build::{
    build_adjacency, build_squared_adjacency, edge_index, index_allowed, prepare, validate_edges,
    LineGraph,
};
pub use check::satisfies;
pub use dfs::{labelings, search, search_with_stats};
pub use project::{pivot_edge, possibilities, project, project_with_symmetry_reduction};
pub use range::range_branch;
pub use types::{
    format_label_set, AllowedLabels, Edge, IndexedAllowed, Label, LabelParams, LabelSet, Labeling,
    PossibilityTable, SearchCfg, SearchStats,
};

#[cfg(test)]
mod tests;
