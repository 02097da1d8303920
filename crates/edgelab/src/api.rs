//! Curated internal API for callers (UNSTABLE).
//!
//! Breaking changes are allowed; this only keeps imports short and consistent.

// Inputs and configuration
pub use crate::labeling::{AllowedLabels, Edge, LabelParams, SearchCfg};
// Search core
pub use crate::labeling::{
    build_adjacency, build_squared_adjacency, labelings, prepare, satisfies, search,
    search_with_stats, LineGraph, SearchStats,
};
// Analyses
pub use crate::labeling::{
    pivot_edge, possibilities, project, project_with_symmetry_reduction, range_branch,
    PossibilityTable,
};
pub use crate::error::LabelingError;
