//! Exhaustive search for L(a,b)-k edge labelings of small graphs.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer the
//!   re-exports in `api` and `prelude` over deep module paths.

pub mod api;
pub mod error;
pub mod labeling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::LabelingError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::LabelingError;
    pub use crate::labeling::{
        format_label_set, labelings, possibilities, range_branch, AllowedLabels, Edge, Label,
        LabelParams, LabelSet, Labeling, PossibilityTable, SearchCfg,
    };
}

/// The extended four-star: a centre joined to four inner vertices, each
/// extended by one pendant edge. Inner edges come first, then the leaves.
pub fn extended_four_star() -> Vec<labeling::Edge> {
    [(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 6), (3, 7), (4, 8)]
        .into_iter()
        .map(labeling::Edge::from)
        .collect()
}
