//! Error types for flowsheet operations.

use pf_blocks::BlockError;
use pf_core::{BlockId, PfError};
use pf_graph::GraphError;
use pf_sizing::SizingError;
use thiserror::Error;

/// Errors that can occur while building or querying a flowsheet.
///
/// Non-convergence is not an error; see `SolveReport`.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Unknown block {id}")]
    UnknownBlock { id: BlockId },

    #[error("Block ids exhausted")]
    IdsExhausted,

    #[error("Size distribution error: {0}")]
    Sizing(#[from] SizingError),

    #[error("Block error: {0}")]
    Block(#[from] BlockError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::UnknownBlock { .. } => PfError::InvalidArg {
                what: "unknown block",
            },
            SolverError::IdsExhausted => PfError::InvalidArg {
                what: "block ids exhausted",
            },
            SolverError::Sizing(inner) => inner.into(),
            SolverError::Block(inner) => inner.into(),
            SolverError::Graph(inner) => inner.into(),
        }
    }
}
