// pf-core/src/units.rs

use uom::si::f64::{MassRate as UomMassRate, VolumeRate as UomVolumeRate};
use uom::si::mass_rate::kilogram_per_second;
use uom::si::volume_rate::cubic_meter_per_second;

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type VolumeRate = UomVolumeRate;

/// Unit system the flowsheet numbers are expressed in.
///
/// - Metric: solids in tonnes per hour, fluid in cubic metres per hour
/// - Imperial: solids in short tons per hour, fluid in US gallons per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Multiplier from the solids-derived fluid rate to the fluid unit.
    ///
    /// Water at one short ton per hour is close to 4 US gal/min; metric rates
    /// share the same magnitude.
    pub fn fluid_factor(self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => 4.0,
        }
    }

    /// Whether metric units are in use.
    pub fn is_metric(self) -> bool {
        matches!(self, UnitSystem::Metric)
    }
}

pub mod constants {
    pub const KG_PER_TONNE: f64 = 1000.0;
    pub const KG_PER_SHORT_TON: f64 = 907.184_74;
    pub const M3_PER_US_GALLON: f64 = 3.785_411_784e-3;
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Typed view of a solids rate expressed in the flowsheet unit system.
#[inline]
pub fn solids_rate(v: f64, system: UnitSystem) -> MassRate {
    use constants::*;
    let kg_per_unit = match system {
        UnitSystem::Metric => KG_PER_TONNE,
        UnitSystem::Imperial => KG_PER_SHORT_TON,
    };
    MassRate::new::<kilogram_per_second>(v * kg_per_unit / SECONDS_PER_HOUR)
}

/// Typed view of a fluid rate expressed in the flowsheet unit system.
#[inline]
pub fn fluid_rate(v: f64, system: UnitSystem) -> VolumeRate {
    use constants::*;
    let m3ps = match system {
        UnitSystem::Metric => v / SECONDS_PER_HOUR,
        UnitSystem::Imperial => v * M3_PER_US_GALLON / SECONDS_PER_MINUTE,
    };
    VolumeRate::new::<cubic_meter_per_second>(m3ps)
}
