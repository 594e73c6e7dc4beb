//! Topology error types.

use pf_core::{BlockId, PfError};

/// Disagreements between the source and destination indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A link is recorded as a source of `to` but `from` does not list `to`
    /// as often as it should.
    MissingDestination { from: BlockId, to: BlockId },

    /// `from` lists `to` as a destination more often than `to` lists `from`
    /// as a source.
    MissingSource { from: BlockId, to: BlockId },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::MissingDestination { from, to } => {
                write!(f, "Block {} feeds {} but has no matching destination entry", from, to)
            }
            GraphError::MissingSource { from, to } => {
                write!(f, "Block {} lists {} as a destination without a matching source entry", from, to)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PfError {
    fn from(err: GraphError) -> Self {
        PfError::Invariant {
            what: err.to_string(),
        }
    }
}
