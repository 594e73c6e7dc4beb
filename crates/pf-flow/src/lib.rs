//! pf-flow: flow data carried on flowsheet ports.
//!
//! Provides:
//! - `ProcessSettings` and `FlowsheetParameters`, the process-wide
//!   configuration every block and flow reads
//! - `FlowData`, solids split by size fraction plus fluid rate and percent
//!   solids
//! - `BlockPorts`, the fixed set of flows owned by one block, with
//!   snapshot/difference support for convergence checks
//!
//! # Example
//!
//! ```
//! use pf_flow::{FlowData, ProcessSettings};
//! use pf_sizing::SizeDistribution;
//!
//! let dist = SizeDistribution::parse("2\n10 5 40 40\n5 0 60 100\n").unwrap();
//! let settings = ProcessSettings::default();
//!
//! let mut feed = FlowData::new(dist.len());
//! feed.distribute_solids(&dist, 10.0, 0.0, 500.0);
//! feed.fluid_from_surface_moisture(0.5, &settings);
//!
//! assert_eq!(feed.solid_rate, 500.0);
//! assert_eq!(feed.fluid_rate, 500.0);
//! assert_eq!(feed.percent_solids, 0.5);
//! ```

pub mod error;
pub mod flow_data;
pub mod ports;
pub mod settings;

pub use error::{FlowError, FlowResult};
pub use flow_data::FlowData;
pub use ports::{BlockPorts, PortsDelta};
pub use settings::{FlowsheetParameters, ProcessSettings};
