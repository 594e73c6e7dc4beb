//! Feed block: the source of solids and water for a flowsheet.

use pf_core::{BlockId, Real};
use pf_flow::{BlockPorts, FlowsheetParameters, ProcessSettings};
use pf_sizing::SizeDistribution;

use crate::kind::BlockKind;
use crate::params::{BlockParameters, KindParameters, ParameterOutcome};
use crate::traits::FlowBlock;

/// Injects `feed_rate` solids spread over the whole size distribution, with
/// the fluid implied by its surface moisture.
///
/// The solids are distributed once and then latched; new parameters or a new
/// size distribution clear the latch.
#[derive(Debug, Clone)]
pub struct Feed {
    id: BlockId,
    pub feed_rate: Real,
    pub surface_moisture: Real,
    distributed: bool,
    ports: BlockPorts,
}

impl Feed {
    pub fn new(id: BlockId, fraction_count: usize) -> Self {
        Self {
            id,
            feed_rate: 0.0,
            surface_moisture: 0.0,
            distributed: false,
            ports: BlockPorts::new(BlockKind::Feed.port_count(), fraction_count),
        }
    }

    /// Whether the solids have been distributed since the last reset.
    pub fn is_distributed(&self) -> bool {
        self.distributed
    }
}

impl FlowBlock for Feed {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> BlockKind {
        BlockKind::Feed
    }

    fn ports(&self) -> &BlockPorts {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut BlockPorts {
        &mut self.ports
    }

    fn on_parameters(&mut self, params: &BlockParameters) -> ParameterOutcome {
        let KindParameters::Feed {
            feed_rate,
            surface_moisture,
        } = params.settings
        else {
            return ParameterOutcome::Ignored;
        };
        self.feed_rate = feed_rate;
        self.surface_moisture = surface_moisture;
        self.distributed = false;
        ParameterOutcome::Applied
    }

    fn on_new_size_distribution(&mut self, distribution: &SizeDistribution) {
        self.distributed = false;
        self.ports.reset(distribution.len());
    }

    fn update_solids(&mut self, params: &FlowsheetParameters) {
        if self.distributed {
            return;
        }
        let dist = &params.distribution;
        let Some(top) = dist.top_size() else {
            return;
        };
        if let Some(fd) = self.ports.get_mut(0) {
            fd.distribute_solids(dist, top, 0.0, self.feed_rate);
            self.distributed = true;
        }
    }

    fn update_fluid(&mut self, settings: &ProcessSettings) {
        if let Some(fd) = self.ports.get_mut(0) {
            fd.fluid_from_surface_moisture(self.surface_moisture, settings);
        }
    }
}
