//! Relaxation solver for plantflow flowsheets.
//!
//! A `Flowsheet` owns its blocks, the links between them and the
//! process-wide parameters. `solve` updates the feed blocks once, then sweeps
//! every other block in id order, summing its sources into its input port and
//! running its transform, until no port moves by more than the tolerance or
//! the iteration cap is hit.

pub mod config;
pub mod error;
pub mod flowsheet;
pub mod solve;

pub use config::{SolveReport, SolverConfig};
pub use error::{SolverError, SolverResult};
pub use flowsheet::Flowsheet;
