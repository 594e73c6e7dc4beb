//! Relaxation solve.

use pf_core::{BlockId, INPUT_PORT};
use pf_flow::FlowData;
use tracing::{debug, warn};

use crate::config::SolveReport;
use crate::flowsheet::Flowsheet;

impl Flowsheet {
    /// Solve the flowsheet under the current update flags.
    ///
    /// Feed blocks are updated once up front. Each pass then visits every
    /// other block in id order: its input is rebuilt from its sources, the
    /// block transform runs, and its ports are compared with their state
    /// before the visit. Once one block has moved by more than the tolerance
    /// the pass is known to be unconverged and later blocks in that pass are
    /// updated without being compared.
    pub fn solve(&mut self) -> SolveReport {
        for block in self.blocks.values_mut() {
            if block.kind().is_source() {
                block.on_update(&self.params);
            }
        }

        let order: Vec<BlockId> = self
            .blocks
            .iter()
            .filter(|(_, b)| !b.kind().is_source())
            .map(|(&id, _)| id)
            .collect();

        let tolerance = self.config.tolerance;
        let mut iterations = 0;
        let converged = loop {
            let mut done = true;
            for &id in &order {
                let Some(input) = self.sum_sources(id) else {
                    continue;
                };
                let Some(block) = self.blocks.get_mut(&id) else {
                    continue;
                };
                let before = block.ports().clone();
                if let Some(port) = block.ports_mut().get_mut(usize::from(INPUT_PORT)) {
                    *port = input;
                }
                block.on_update(&self.params);

                if done && block.ports().difference(&before).exceeds(tolerance) {
                    debug!(block = %id, pass = iterations, "block still moving");
                    done = false;
                }
            }
            iterations += 1;
            if done || iterations > self.config.max_iterations {
                break done;
            }
        };

        self.last_iterations = iterations;
        if converged {
            debug!(iterations, "flowsheet converged");
        } else {
            warn!(
                iterations,
                tolerance,
                "flowsheet did not converge within the iteration cap"
            );
        }
        SolveReport {
            converged,
            iterations,
        }
    }

    /// The input port of `id` rebuilt from its sources.
    ///
    /// The halves enabled by the update flags are zeroed and each source is
    /// added in link order; the disabled halves keep their current values.
    /// A link from the block's own input port adds the partial sum so far.
    fn sum_sources(&self, id: BlockId) -> Option<FlowData> {
        let settings = &self.params.settings;
        let mut input = self.blocks.get(&id)?.ports().get(usize::from(INPUT_PORT))?.clone();
        if settings.update_solids {
            input.zero_solids();
        }
        if settings.update_water {
            input.zero_fluid();
        }

        for source in self.topology.sources_of(id) {
            if source.block == id && source.port == INPUT_PORT {
                let partial = input.clone();
                input.accumulate(&partial, settings);
                continue;
            }
            let flow = self
                .blocks
                .get(&source.block)
                .and_then(|b| b.ports().get(usize::from(source.port)));
            match flow {
                Some(fd) => input.accumulate(fd, settings),
                None => debug!(
                    block = %id,
                    source = %source.block,
                    port = source.port,
                    "skipping source port that does not exist"
                ),
            }
        }
        Some(input)
    }
}
