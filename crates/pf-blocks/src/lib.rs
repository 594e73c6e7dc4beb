//! pf-blocks: block library for mass-balance flowsheets.
//!
//! Provides the block contract and the built-in kinds:
//! - Feed blocks that inject solids over the size distribution
//! - Deslime screens with one or two decks
//! - Sump pumps that add water
//! - Observers that surface the flow they receive
//!
//! All blocks implement the `FlowBlock` trait. A block only ever touches its
//! own ports; process-wide settings are lent to it for each update.
//!
//! # Example
//!
//! ```
//! use pf_blocks::{BlockFactory, BlockKind, BlockParameters, KindParameters, ParameterOutcome};
//! use pf_flow::FlowsheetParameters;
//! use pf_sizing::SizeDistribution;
//!
//! let mut params = FlowsheetParameters::default();
//! params.distribution = SizeDistribution::parse("2\n10 5 40 40\n5 0 60 100\n").unwrap();
//!
//! let mut factory = BlockFactory::default();
//! let mut feed = factory.create_kind(BlockKind::Feed, params.fraction_count()).unwrap();
//!
//! let id = feed.id();
//! let outcome = feed.on_parameters(&BlockParameters::new(
//!     id,
//!     KindParameters::Feed { feed_rate: 500.0, surface_moisture: 0.5 },
//! ));
//! assert_eq!(outcome, ParameterOutcome::Applied);
//!
//! feed.on_update(&params);
//! let out = feed.port(0).unwrap();
//! assert_eq!(out.solid_rate, 500.0);
//! assert_eq!(out.fluid_rate, 500.0);
//! ```

pub mod error;
pub mod factory;
pub mod feed;
pub mod kind;
pub mod observer;
pub mod params;
pub mod screen;
pub mod sump_pump;
pub mod traits;

// Re-exports
pub use error::{BlockError, BlockResult};
pub use factory::{BlockFactory, DEFAULT_BASE_ID};
pub use feed::Feed;
pub use kind::BlockKind;
pub use observer::Observer;
pub use params::{BlockParameters, KindParameters, ParameterOutcome};
pub use screen::DeslimeScreen;
pub use sump_pump::SumpPump;
pub use traits::FlowBlock;
