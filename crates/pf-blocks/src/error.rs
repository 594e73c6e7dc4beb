//! Error types for block operations.

use pf_core::PfError;
use pf_flow::FlowError;
use thiserror::Error;

/// Errors that can occur when addressing or naming blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("Unknown block kind: {name}")]
    UnknownKind { name: String },
}

pub type BlockResult<T> = Result<T, BlockError>;

impl From<BlockError> for PfError {
    fn from(e: BlockError) -> Self {
        match e {
            BlockError::Flow(inner) => inner.into(),
            BlockError::UnknownKind { .. } => PfError::InvalidArg {
                what: "unknown block kind",
            },
        }
    }
}
