//! Fixed-size port sets owned by blocks.
//!
//! Port 0 is always the block input; every other port is an output whose
//! meaning depends on the block kind.

use pf_core::Real;

use crate::error::{FlowError, FlowResult};
use crate::flow_data::FlowData;
use crate::settings::ProcessSettings;

/// The flows on every port of one block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockPorts {
    ports: Vec<FlowData>,
}

/// Result of comparing two port sets.
#[derive(Debug, Clone, PartialEq)]
pub enum PortsDelta {
    /// Per-port, per-fraction signed difference (`self - other`).
    Delta(BlockPorts),
    /// Port or fraction counts differ; no meaningful delta exists.
    Mismatched,
}

impl PortsDelta {
    /// Whether any fraction or fluid delta exceeds `tolerance` in magnitude.
    ///
    /// A mismatched comparison always counts as exceeding.
    pub fn exceeds(&self, tolerance: Real) -> bool {
        match self {
            PortsDelta::Delta(delta) => delta.iter().any(|fd| {
                fd.fluid_rate.abs() > tolerance
                    || fd.fractions().iter().any(|m| m.abs() > tolerance)
            }),
            PortsDelta::Mismatched => true,
        }
    }
}

impl BlockPorts {
    /// `port_count` zeroed flows, each sized to `fraction_count`.
    pub fn new(port_count: usize, fraction_count: usize) -> Self {
        Self {
            ports: vec![FlowData::new(fraction_count); port_count],
        }
    }

    /// Resize every port to a new fraction count and zero it.
    pub fn reset(&mut self, fraction_count: usize) {
        for fd in &mut self.ports {
            fd.reset(fraction_count);
        }
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn port(&self, n: usize) -> FlowResult<&FlowData> {
        let count = self.ports.len();
        self.ports
            .get(n)
            .ok_or(FlowError::PortOutOfRange { port: n, count })
    }

    pub fn port_mut(&mut self, n: usize) -> FlowResult<&mut FlowData> {
        let count = self.ports.len();
        self.ports
            .get_mut(n)
            .ok_or(FlowError::PortOutOfRange { port: n, count })
    }

    pub fn get(&self, n: usize) -> Option<&FlowData> {
        self.ports.get(n)
    }

    pub fn get_mut(&mut self, n: usize) -> Option<&mut FlowData> {
        self.ports.get_mut(n)
    }

    /// The input port alongside the output ports, for transforms that read
    /// one while writing the others. Output port `n` is at index `n - 1`.
    pub fn split_input_mut(&mut self) -> Option<(&mut FlowData, &mut [FlowData])> {
        self.ports.split_first_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowData> {
        self.ports.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FlowData> {
        self.ports.iter_mut()
    }

    /// Signed difference `self - other`, port by port.
    ///
    /// Fractions, solid rate and fluid rate are differenced; percent solids
    /// of the delta is left at zero.
    pub fn difference(&self, other: &BlockPorts) -> PortsDelta {
        if self.ports.len() != other.ports.len() {
            return PortsDelta::Mismatched;
        }
        let mut delta = Vec::with_capacity(self.ports.len());
        for (mine, theirs) in self.ports.iter().zip(&other.ports) {
            if mine.fraction_count() != theirs.fraction_count() {
                return PortsDelta::Mismatched;
            }
            let mut fd = FlowData::new(mine.fraction_count());
            for (slot, (a, b)) in fd
                .fractions_mut()
                .iter_mut()
                .zip(mine.fractions().iter().zip(theirs.fractions()))
            {
                *slot = a - b;
            }
            fd.solid_rate = mine.solid_rate - theirs.solid_rate;
            fd.fluid_rate = mine.fluid_rate - theirs.fluid_rate;
            delta.push(fd);
        }
        PortsDelta::Delta(BlockPorts { ports: delta })
    }

    /// Refresh percent solids on every port.
    pub fn update_percent_solids(&mut self, settings: &ProcessSettings) {
        for fd in &mut self.ports {
            fd.update_percent_solids(settings);
        }
    }

    /// Total solids over the output ports (everything but port 0).
    pub fn output_solids(&self) -> Real {
        self.ports.iter().skip(1).map(|fd| fd.solid_rate).sum()
    }

    /// Total fluid over the output ports (everything but port 0).
    pub fn output_fluid(&self) -> Real {
        self.ports.iter().skip(1).map(|fd| fd.fluid_rate).sum()
    }
}
