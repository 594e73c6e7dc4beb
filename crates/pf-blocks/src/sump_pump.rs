//! Sump pump: a collection point that tops up the water.

use pf_core::{BlockId, Real};
use pf_flow::{BlockPorts, ProcessSettings};

use crate::kind::BlockKind;
use crate::params::{BlockParameters, KindParameters, ParameterOutcome};
use crate::traits::FlowBlock;

/// Passes its input through with `add_water` added to the fluid rate.
/// Solids are untouched.
#[derive(Debug, Clone)]
pub struct SumpPump {
    id: BlockId,
    pub add_water: Real,
    ports: BlockPorts,
}

impl SumpPump {
    pub fn new(id: BlockId, fraction_count: usize) -> Self {
        Self {
            id,
            add_water: 0.0,
            ports: BlockPorts::new(BlockKind::SumpPump.port_count(), fraction_count),
        }
    }
}

impl FlowBlock for SumpPump {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> BlockKind {
        BlockKind::SumpPump
    }

    fn ports(&self) -> &BlockPorts {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut BlockPorts {
        &mut self.ports
    }

    fn on_parameters(&mut self, params: &BlockParameters) -> ParameterOutcome {
        match params.settings {
            KindParameters::SumpPump { add_water } => {
                self.add_water = add_water;
                ParameterOutcome::Applied
            }
            _ => ParameterOutcome::Ignored,
        }
    }

    fn update_fluid(&mut self, _settings: &ProcessSettings) {
        if let Some(fd) = self.ports.get_mut(0) {
            fd.fluid_rate += self.add_water;
        }
    }
}
