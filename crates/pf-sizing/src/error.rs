//! Size distribution errors.

use pf_core::PfError;
use thiserror::Error;

/// Result type for size distribution operations.
pub type SizingResult<T> = Result<T, SizingError>;

/// Errors that can occur while loading a size distribution.
#[derive(Error, Debug)]
pub enum SizingError {
    /// The source could not be opened or read.
    #[error("Could not read size distribution '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header line did not hold a fraction count.
    #[error("Invalid size distribution header: {line:?}")]
    Parse { line: String },
}

impl From<SizingError> for PfError {
    fn from(err: SizingError) -> Self {
        PfError::Invariant {
            what: err.to_string(),
        }
    }
}
