//! Flowsheet definition file schema.

use pf_blocks::{BlockKind, KindParameters};
use pf_core::{PortNo, Real};
use pf_flow::ProcessSettings;
use pf_sizing::{SizeDistribution, SizeFraction};
use pf_solver::SolverConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowsheetDef {
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub settings: ProcessSettings,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_distribution: Option<SizeDistributionDef>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub links: Vec<LinkDef>,
}

/// Where the size distribution comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SizeDistributionDef {
    /// A distribution text file; relative paths resolve against the
    /// directory of the definition file.
    File { path: String },
    Inline { fractions: Vec<FractionDef> },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FractionDef {
    pub passing: Real,
    pub retained: Real,
    pub fractional_weight: Real,
    pub cumulative_weight: Real,
}

impl From<&FractionDef> for SizeFraction {
    fn from(def: &FractionDef) -> Self {
        SizeFraction::new(
            def.passing,
            def.retained,
            def.fractional_weight,
            def.cumulative_weight,
        )
    }
}

impl FractionDef {
    pub fn to_distribution(fractions: &[FractionDef]) -> SizeDistribution {
        SizeDistribution::from_fractions(fractions.iter().map(SizeFraction::from).collect())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<KindParameters>,
}

/// A link from output `port` of block `from` into the input of `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkDef {
    pub from: String,
    #[serde(default)]
    pub port: PortNo,
    pub to: String,
}
