//! pf-sizing: particle size distributions for plantflow.
//!
//! Provides:
//! - `SizeFraction` rows (passing/retained sieve sizes with weights)
//! - `SizeDistribution`, the ordered table every flow on the flowsheet is
//!   split against
//! - the whitespace-delimited text loader
//! - range lookups used to split and aggregate solids by particle size
//!
//! # Example
//!
//! ```
//! use pf_sizing::SizeDistribution;
//!
//! let table = "3\n\
//!              50 25 20 20\n\
//!              25 6.35 50 70\n\
//!              6.35 0 30 100\n";
//! let dist = SizeDistribution::parse(table).unwrap();
//!
//! assert_eq!(dist.len(), 3);
//! assert_eq!(dist.top_size(), Some(50.0));
//! assert_eq!(dist.fractional_weight(25.0, 0.0), 80.0);
//! ```

pub mod distribution;
pub mod error;
pub mod loader;

pub use distribution::{FractionRange, SizeDistribution, SizeFraction};
pub use error::{SizingError, SizingResult};
