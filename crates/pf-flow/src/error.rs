//! Error types for flow data access.

use pf_core::PfError;
use thiserror::Error;

/// Errors that can occur when addressing ports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Port {port} out of range (block has {count} ports)")]
    PortOutOfRange { port: usize, count: usize },
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for PfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::PortOutOfRange { port, count } => PfError::IndexOob {
                what: "port",
                index: port,
                len: count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_conversion() {
        let err = FlowError::PortOutOfRange { port: 4, count: 2 };
        assert!(err.to_string().contains("Port 4"));
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::IndexOob { index: 4, len: 2, .. }));
    }
}
