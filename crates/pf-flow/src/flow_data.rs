//! Flow carried on one port.

use core::fmt;
use core::ops::{Index, IndexMut};

use pf_core::units::{self, MassRate, VolumeRate};
use pf_core::{Real, UnitSystem, round_to_granularity};
use pf_sizing::SizeDistribution;

use crate::settings::ProcessSettings;

/// Solids split by size fraction plus the carrying fluid.
///
/// `solid_rate` is the sum of the fraction masses whenever solids are being
/// updated; the operations that write solids keep both in step.
/// `percent_solids` is a ratio in `[0, 1]` despite its name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowData {
    fractions: Vec<Real>,
    pub solid_rate: Real,
    pub fluid_rate: Real,
    pub percent_solids: Real,
}

impl FlowData {
    /// Zeroed flow with one slot per size fraction.
    pub fn new(fraction_count: usize) -> Self {
        Self {
            fractions: vec![0.0; fraction_count],
            ..Self::default()
        }
    }

    /// Zeroed flow sized to a distribution.
    pub fn init(distribution: &SizeDistribution) -> Self {
        Self::new(distribution.len())
    }

    /// Reallocate to a new fraction count and zero everything.
    pub fn reset(&mut self, fraction_count: usize) {
        self.fractions.clear();
        self.fractions.resize(fraction_count, 0.0);
        self.zero_fluid();
        self.solid_rate = 0.0;
    }

    pub fn fraction_count(&self) -> usize {
        self.fractions.len()
    }

    pub fn fractions(&self) -> &[Real] {
        &self.fractions
    }

    pub fn fractions_mut(&mut self) -> &mut [Real] {
        &mut self.fractions
    }

    pub fn zero(&mut self) {
        self.zero_solids();
        self.zero_fluid();
    }

    pub fn zero_solids(&mut self) {
        self.solid_rate = 0.0;
        self.fractions.fill(0.0);
    }

    pub fn zero_fluid(&mut self) {
        self.fluid_rate = 0.0;
        self.percent_solids = 0.0;
    }

    /// Recompute `solid_rate` from the fraction masses.
    pub fn resum_solids(&mut self) {
        self.solid_rate = self.fractions.iter().sum();
    }

    /// Inject `total` solids across the fractions between two sieve sizes.
    ///
    /// The flow is zeroed first; each fraction in range receives
    /// `fractional_weight * total / 100`. Fractions outside the range stay
    /// empty.
    pub fn distribute_solids(
        &mut self,
        distribution: &SizeDistribution,
        passing: Real,
        retained: Real,
        total: Real,
    ) {
        self.zero();
        let range = distribution.range(passing, retained);
        for i in range.indices() {
            if let (Some(slot), Some(row)) = (self.fractions.get_mut(i), distribution.fraction(i)) {
                *slot = row.fractional_weight * total / 100.0;
            }
        }
        self.resum_solids();
    }

    /// Add another flow into this one, honoring the update flags.
    ///
    /// Solids are added fraction by fraction only when solids are updating;
    /// fluid is added (and percent solids refreshed) only when water is
    /// updating. Either half may therefore be left untouched.
    pub fn accumulate(&mut self, other: &FlowData, settings: &ProcessSettings) {
        if settings.update_solids {
            for (mine, theirs) in self.fractions.iter_mut().zip(&other.fractions) {
                *mine += theirs;
            }
            self.resum_solids();
        }
        if settings.update_water {
            self.fluid_rate += other.fluid_rate;
            self.update_percent_solids(settings);
        }
    }

    /// Set fluid from a surface moisture ratio (`1 - percent solids`).
    pub fn fluid_from_surface_moisture(&mut self, surface_moisture: Real, settings: &ProcessSettings) {
        self.fluid_from_percent_solids(1.0 - surface_moisture, settings);
    }

    /// Set fluid so the flow carries `ps` solids by weight.
    pub fn fluid_from_percent_solids(&mut self, ps: Real, settings: &ProcessSettings) {
        let solids = self.solid_rate;
        self.fluid_rate = (solids / ps - solids) * settings.unit_system.fluid_factor();
        self.round_fluid(settings.water_round_to);
        self.percent_solids = ps;
    }

    /// Round the fluid rate to a multiple of `granularity`.
    pub fn round_fluid(&mut self, granularity: i64) {
        self.fluid_rate = round_to_granularity(self.fluid_rate, granularity);
    }

    /// Recompute percent solids from the current rates.
    pub fn update_percent_solids(&mut self, settings: &ProcessSettings) {
        let fluid = self.fluid_rate / settings.unit_system.fluid_factor();
        let total = self.solid_rate + fluid;
        self.percent_solids = if total == 0.0 {
            0.0
        } else {
            self.solid_rate / total
        };
    }

    /// Copy the solids half of another flow, reallocating if the fraction
    /// counts differ.
    pub fn copy_solids(&mut self, other: &FlowData) {
        self.fractions.clone_from(&other.fractions);
        self.solid_rate = other.solid_rate;
    }

    /// Copy the fluid half of another flow.
    pub fn copy_fluid(&mut self, other: &FlowData) {
        self.fluid_rate = other.fluid_rate;
        self.percent_solids = other.percent_solids;
    }

    pub fn solids_mass_rate(&self, system: UnitSystem) -> MassRate {
        units::solids_rate(self.solid_rate, system)
    }

    pub fn fluid_volume_rate(&self, system: UnitSystem) -> VolumeRate {
        units::fluid_rate(self.fluid_rate, system)
    }
}

impl Index<usize> for FlowData {
    type Output = Real;

    fn index(&self, i: usize) -> &Real {
        &self.fractions[i]
    }
}

impl IndexMut<usize> for FlowData {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.fractions[i]
    }
}

impl fmt::Display for FlowData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------")?;
        writeln!(f, "SolidsRate: {}", self.solid_rate)?;
        writeln!(f, "FluidsRate: {}", self.fluid_rate)?;
        writeln!(f, "% SOL: {}", self.percent_solids)?;
        for (i, mass) in self.fractions.iter().enumerate() {
            writeln!(f, "[{i}]\t{mass}")?;
        }
        writeln!(f, "-------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_sizing::SizeFraction;

    fn dist() -> SizeDistribution {
        SizeDistribution::from_fractions(vec![
            SizeFraction::new(50.0, 25.4, 20.0, 20.0),
            SizeFraction::new(25.4, 6.35, 50.0, 70.0),
            SizeFraction::new(6.35, 0.0, 30.0, 100.0),
        ])
    }

    fn metric() -> ProcessSettings {
        ProcessSettings::default()
    }

    fn imperial() -> ProcessSettings {
        ProcessSettings {
            unit_system: UnitSystem::Imperial,
            ..ProcessSettings::default()
        }
    }

    #[test]
    fn new_is_zeroed() {
        let fd = FlowData::new(3);
        assert_eq!(fd.fractions(), &[0.0, 0.0, 0.0]);
        assert_eq!(fd.solid_rate, 0.0);
        assert_eq!(fd.fluid_rate, 0.0);
        assert_eq!(fd.percent_solids, 0.0);
        assert_eq!(FlowData::init(&dist()).fraction_count(), 3);
    }

    #[test]
    fn distribute_whole_table() {
        let mut fd = FlowData::new(3);
        fd.fluid_rate = 12.0;
        fd.distribute_solids(&dist(), 50.0, 0.0, 700.0);
        assert_eq!(fd.fractions(), &[140.0, 350.0, 210.0]);
        assert_eq!(fd.solid_rate, 700.0);
        assert_eq!(fd.fluid_rate, 0.0);
    }

    #[test]
    fn distribute_partial_range() {
        let mut fd = FlowData::new(3);
        fd.distribute_solids(&dist(), 25.4, 0.0, 100.0);
        assert_eq!(fd.fractions(), &[0.0, 50.0, 30.0]);
        assert_eq!(fd.solid_rate, 80.0);
    }

    #[test]
    fn distribute_unmatched_range_is_empty() {
        let mut fd = FlowData::new(3);
        fd.distribute_solids(&dist(), 30.0, 0.0, 100.0);
        assert_eq!(fd.solid_rate, 0.0);
    }

    #[test]
    fn accumulate_both_halves() {
        let mut a = FlowData::new(2);
        a[0] = 1.0;
        a[1] = 2.0;
        a.resum_solids();
        a.fluid_rate = 3.0;
        let b = a.clone();

        a.accumulate(&b, &metric());
        assert_eq!(a.fractions(), &[2.0, 4.0]);
        assert_eq!(a.solid_rate, 6.0);
        assert_eq!(a.fluid_rate, 6.0);
        assert_eq!(a.percent_solids, 0.5);
    }

    #[test]
    fn accumulate_solids_only_leaves_fluid() {
        let mut a = FlowData::new(1);
        a.fluid_rate = 5.0;
        let mut b = FlowData::new(1);
        b[0] = 4.0;
        b.fluid_rate = 9.0;

        a.accumulate(&b, &metric().solids_only());
        assert_eq!(a.solid_rate, 4.0);
        assert_eq!(a.fluid_rate, 5.0);
        assert_eq!(a.percent_solids, 0.0);
    }

    #[test]
    fn accumulate_water_only_leaves_solids() {
        let mut a = FlowData::new(1);
        a[0] = 2.0;
        a.solid_rate = 2.0;
        let mut b = FlowData::new(1);
        b[0] = 4.0;
        b.fluid_rate = 2.0;

        a.accumulate(&b, &metric().water_only());
        assert_eq!(a[0], 2.0);
        assert_eq!(a.solid_rate, 2.0);
        assert_eq!(a.fluid_rate, 2.0);
        assert_eq!(a.percent_solids, 0.5);
    }

    #[test]
    fn fluid_from_percent_solids_metric_and_imperial() {
        let mut fd = FlowData::new(1);
        fd.solid_rate = 300.0;
        fd.fluid_from_percent_solids(0.6, &metric());
        assert_eq!(fd.fluid_rate, 200.0);
        assert_eq!(fd.percent_solids, 0.6);

        fd.fluid_from_percent_solids(0.6, &imperial());
        assert_eq!(fd.fluid_rate, 800.0);
        fd.update_percent_solids(&imperial());
        assert!((fd.percent_solids - 0.6).abs() < 1e-12);
    }

    #[test]
    fn fluid_from_surface_moisture_rounds() {
        let settings = ProcessSettings {
            water_round_to: 2,
            ..metric()
        };
        let mut fd = FlowData::new(1);
        fd.solid_rate = 700.0;
        fd.fluid_from_surface_moisture(0.7, &settings);
        // 700 / 0.3 - 700 = 1633.3, truncated to 1633, remainder 1 rounds down
        assert_eq!(fd.fluid_rate, 1632.0);
        assert!((fd.percent_solids - 0.3).abs() < 1e-12);
    }

    #[test]
    fn round_fluid_granularity() {
        let mut fd = FlowData::new(0);
        fd.fluid_rate = 301.0;
        fd.round_fluid(2);
        assert_eq!(fd.fluid_rate, 300.0);
        fd.fluid_rate = 303.0;
        fd.round_fluid(2);
        assert_eq!(fd.fluid_rate, 302.0);
        fd.fluid_rate = 306.0;
        fd.round_fluid(10);
        assert_eq!(fd.fluid_rate, 310.0);
    }

    #[test]
    fn percent_solids_of_empty_flow_is_zero() {
        let mut fd = FlowData::new(2);
        fd.update_percent_solids(&metric());
        assert_eq!(fd.percent_solids, 0.0);
    }

    #[test]
    fn reset_resizes_and_zeroes() {
        let mut fd = FlowData::new(2);
        fd[1] = 3.0;
        fd.solid_rate = 3.0;
        fd.fluid_rate = 4.0;
        fd.reset(5);
        assert_eq!(fd.fraction_count(), 5);
        assert_eq!(fd, FlowData::new(5));
    }

    #[test]
    fn copy_halves() {
        let mut src = FlowData::new(3);
        src.distribute_solids(&dist(), 50.0, 0.0, 10.0);
        src.fluid_rate = 7.0;
        src.percent_solids = 0.4;

        let mut dst = FlowData::new(1);
        dst.copy_solids(&src);
        assert_eq!(dst.fraction_count(), 3);
        assert_eq!(dst.solid_rate, src.solid_rate);
        assert_eq!(dst.fluid_rate, 0.0);

        dst.copy_fluid(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn typed_views() {
        let mut fd = FlowData::new(0);
        fd.solid_rate = 3.6;
        fd.fluid_rate = 3.6;
        assert!((fd.solids_mass_rate(UnitSystem::Metric).value - 1.0).abs() < 1e-12);
        assert!((fd.fluid_volume_rate(UnitSystem::Metric).value - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn display_lists_fractions() {
        let mut fd = FlowData::new(2);
        fd[0] = 1.5;
        let text = fd.to_string();
        assert!(text.contains("SolidsRate"));
        assert!(text.contains("[0]\t1.5"));
    }
}
