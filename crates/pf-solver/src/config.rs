//! Solver configuration and results.

use pf_core::Real;
use serde::{Deserialize, Serialize};

/// Convergence settings for the relaxation loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Largest per-fraction or fluid change between passes that still counts
    /// as converged.
    #[serde(default = "default_tolerance")]
    pub tolerance: Real,
    /// Pass cap; a solve runs at most `max_iterations + 1` passes.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> Real {
    0.01
}

fn default_max_iterations() -> usize {
    100
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Outcome of one solve.
///
/// A solve that hits the cap is not an error: the port states stay valid and
/// inspectable, they are just not known to be stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    pub converged: bool,
    pub iterations: usize,
}
