//! Per-kind block parameters.

use pf_core::{BlockId, Real};
use serde::{Deserialize, Serialize};

use crate::kind::BlockKind;

/// Settings for one configurable block kind.
///
/// Moistures are surface moisture ratios, cut points are sieve sizes in
/// millimetres and rates are in the flowsheet unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindParameters {
    Feed {
        feed_rate: Real,
        surface_moisture: Real,
    },
    DeslimeSingleDeck {
        deck_moisture: Real,
        cut_point: Real,
        wash_water: Real,
    },
    DeslimeDoubleDeck {
        top_moisture: Real,
        bottom_moisture: Real,
        top_cut: Real,
        bottom_cut: Real,
        wash_water: Real,
    },
    SumpPump {
        add_water: Real,
    },
}

impl KindParameters {
    /// The kind these settings are meant for.
    pub fn kind(&self) -> BlockKind {
        match self {
            KindParameters::Feed { .. } => BlockKind::Feed,
            KindParameters::DeslimeSingleDeck { .. } => BlockKind::DeslimeSingleDeck,
            KindParameters::DeslimeDoubleDeck { .. } => BlockKind::DeslimeDoubleDeck,
            KindParameters::SumpPump { .. } => BlockKind::SumpPump,
        }
    }
}

/// Parameters addressed to one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockParameters {
    pub block: BlockId,
    pub settings: KindParameters,
}

impl BlockParameters {
    pub fn new(block: BlockId, settings: KindParameters) -> Self {
        Self { block, settings }
    }

    pub fn kind(&self) -> BlockKind {
        self.settings.kind()
    }
}

/// What a block did with a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterOutcome {
    Applied,
    /// The parameters were for another kind; the block is unchanged.
    Ignored,
}
