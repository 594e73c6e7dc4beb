//! The contract every flowsheet block honors.

use pf_core::{BlockId, PortNo};
use pf_flow::{BlockPorts, FlowData, FlowsheetParameters, ProcessSettings};
use pf_sizing::SizeDistribution;

use crate::error::BlockResult;
use crate::kind::BlockKind;
use crate::params::{BlockParameters, ParameterOutcome};

/// A node of the flowsheet: owns its ports and transforms the flow on its
/// input port (port 0) into flows on its output ports.
///
/// The flowsheet fills port 0 from the block's sources before calling
/// `on_update`; blocks never reach into each other. Everything process-wide
/// arrives as an argument.
pub trait FlowBlock: Send + Sync {
    fn id(&self) -> BlockId;

    fn kind(&self) -> BlockKind;

    fn ports(&self) -> &BlockPorts;

    fn ports_mut(&mut self) -> &mut BlockPorts;

    /// Flow on port `n`.
    fn port(&self, n: PortNo) -> BlockResult<&FlowData> {
        Ok(self.ports().port(usize::from(n))?)
    }

    /// Take a parameter set. Parameters for another kind are ignored.
    fn on_parameters(&mut self, params: &BlockParameters) -> ParameterOutcome;

    /// The size distribution changed: resize and zero every port.
    fn on_new_size_distribution(&mut self, distribution: &SizeDistribution) {
        self.ports_mut().reset(distribution.len());
    }

    /// Run the transforms the update flags enable.
    ///
    /// Solids first, then fluid followed by a percent solids refresh on every
    /// port.
    fn on_update(&mut self, params: &FlowsheetParameters) {
        let settings = &params.settings;
        if settings.update_solids {
            self.update_solids(params);
        }
        if settings.update_water {
            self.update_fluid(settings);
            self.ports_mut().update_percent_solids(settings);
        }
    }

    /// Solids transform. Default: pass-through (nothing to do).
    fn update_solids(&mut self, _params: &FlowsheetParameters) {}

    /// Fluid transform. Default: pass-through (nothing to do).
    fn update_fluid(&mut self, _settings: &ProcessSettings) {}

    /// Last flow state surfaced by an observation block.
    fn last_observed(&self) -> Option<&FlowData> {
        None
    }
}
