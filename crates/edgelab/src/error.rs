//! Input validation errors.
//!
//! The search itself is total; every failure mode is a precondition violation
//! detected before the first label is tried.

use std::fmt;

use crate::labeling::Edge;

/// Error type shared by all labeling entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelingError {
    InvalidParams { reason: String },
    UnknownEdge { edge: Edge },
    SelfLoop { index: usize, edge: Edge },
}

impl LabelingError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LabelingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid labeling params: {reason}"),
            Self::UnknownEdge { edge } => write!(f, "edge {edge} is not in the edge list"),
            Self::SelfLoop { index, edge } => {
                write!(f, "edge #{index} {edge} is a self-loop")
            }
        }
    }
}

impl std::error::Error for LabelingError {}
