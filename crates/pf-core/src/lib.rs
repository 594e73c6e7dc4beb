//! pf-core: stable foundation for plantflow.
//!
//! Contains:
//! - ids (stable block identities and port numbers)
//! - numeric (Real + water rounding)
//! - units (metric/imperial unit systems + uom views of flow rates)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use units::UnitSystem;
