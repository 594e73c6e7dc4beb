//! pf-graph: link topology for plantflow flowsheets.
//!
//! Provides:
//! - `Topology`, the directed links between block ports, indexed both by
//!   destination (who feeds me) and by source (whom do I feed)
//! - A single mutation path that keeps both indexes in agreement
//! - Consistency checking for the two indexes
//!
//! # Example
//!
//! ```
//! use pf_core::BlockId;
//! use pf_graph::Topology;
//!
//! let feed = BlockId::new(100).unwrap();
//! let screen = BlockId::new(101).unwrap();
//!
//! let mut topo = Topology::new();
//! topo.link(feed, 0, screen);
//!
//! assert_eq!(topo.sources_of(screen).len(), 1);
//! assert_eq!(topo.destinations_of(feed), &[screen]);
//! assert!(topo.is_consistent());
//! ```

pub mod error;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use topology::{Link, Source, Topology};
