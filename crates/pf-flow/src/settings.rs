//! Process-wide configuration shared by every block on a flowsheet.

use pf_core::UnitSystem;
use pf_sizing::SizeDistribution;
use serde::{Deserialize, Serialize};

/// Switches and unit choices read by every flow operation.
///
/// The two update flags gate which half of each block transform runs in a
/// solve: a solids-only pass followed by a water-only pass is the usual
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessSettings {
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Fluid rates are rounded to a multiple of this value.
    #[serde(default = "default_water_round_to")]
    pub water_round_to: i64,
    #[serde(default = "default_true")]
    pub update_solids: bool,
    #[serde(default = "default_true")]
    pub update_water: bool,
}

fn default_water_round_to() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            water_round_to: default_water_round_to(),
            update_solids: true,
            update_water: true,
        }
    }
}

impl ProcessSettings {
    /// Settings for a pass that only moves solids.
    pub fn solids_only(self) -> Self {
        Self {
            update_solids: true,
            update_water: false,
            ..self
        }
    }

    /// Settings for a pass that only balances water.
    pub fn water_only(self) -> Self {
        Self {
            update_solids: false,
            update_water: true,
            ..self
        }
    }
}

/// Everything a block reads while it updates: the settings plus the loaded
/// size distribution.
#[derive(Debug, Clone, Default)]
pub struct FlowsheetParameters {
    pub settings: ProcessSettings,
    pub distribution: SizeDistribution,
}

impl FlowsheetParameters {
    pub fn new(settings: ProcessSettings) -> Self {
        Self {
            settings,
            distribution: SizeDistribution::new(),
        }
    }

    /// Number of size fractions every flow is sized to.
    pub fn fraction_count(&self) -> usize {
        self.distribution.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = ProcessSettings::default();
        assert!(s.unit_system.is_metric());
        assert_eq!(s.water_round_to, 1);
        assert!(s.update_solids && s.update_water);
    }

    #[test]
    fn pass_helpers_flip_flags() {
        let s = ProcessSettings::default().solids_only();
        assert!(s.update_solids && !s.update_water);
        let w = s.water_only();
        assert!(!w.update_solids && w.update_water);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let s: ProcessSettings = serde_json::from_str(r#"{"unit_system":"imperial"}"#).unwrap();
        assert_eq!(s.unit_system, UnitSystem::Imperial);
        assert_eq!(s.water_round_to, 1);
        assert!(s.update_water);
    }
}
