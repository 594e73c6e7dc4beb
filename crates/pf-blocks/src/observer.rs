//! Observation sink: surfaces the flow it receives.

use pf_core::BlockId;
use pf_flow::{BlockPorts, FlowData, FlowsheetParameters};
use tracing::info;

use crate::kind::BlockKind;
use crate::params::{BlockParameters, ParameterOutcome};
use crate::traits::FlowBlock;

/// Records and logs its input on every update instead of transforming it.
#[derive(Debug, Clone)]
pub struct Observer {
    id: BlockId,
    ports: BlockPorts,
    observed: Option<FlowData>,
    observations: usize,
}

impl Observer {
    pub fn new(id: BlockId, fraction_count: usize) -> Self {
        Self {
            id,
            ports: BlockPorts::new(BlockKind::Observer.port_count(), fraction_count),
            observed: None,
            observations: 0,
        }
    }

    /// Number of updates seen since creation.
    pub fn observations(&self) -> usize {
        self.observations
    }
}

impl FlowBlock for Observer {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> BlockKind {
        BlockKind::Observer
    }

    fn ports(&self) -> &BlockPorts {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut BlockPorts {
        &mut self.ports
    }

    fn on_parameters(&mut self, _params: &BlockParameters) -> ParameterOutcome {
        ParameterOutcome::Ignored
    }

    fn on_update(&mut self, _params: &FlowsheetParameters) {
        let Some(fd) = self.ports.get(0) else {
            return;
        };
        info!(
            block = %self.id,
            solid_rate = fd.solid_rate,
            fluid_rate = fd.fluid_rate,
            percent_solids = fd.percent_solids,
            "observed flow"
        );
        self.observed = Some(fd.clone());
        self.observations += 1;
    }

    fn last_observed(&self) -> Option<&FlowData> {
        self.observed.as_ref()
    }
}
