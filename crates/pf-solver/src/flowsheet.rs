//! The flowsheet: block registry, links and process-wide parameters.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use pf_blocks::{BlockFactory, BlockKind, BlockParameters, FlowBlock, ParameterOutcome};
use pf_core::{BlockId, PortNo, Real, UnitSystem};
use pf_flow::{FlowData, FlowsheetParameters, ProcessSettings};
use pf_graph::Topology;
use pf_sizing::SizeDistribution;
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};

/// A network of blocks joined by directed links.
///
/// Blocks are kept in id order, which is also the order a solve visits them
/// in. All graph mutation goes through this type so the link indexes and the
/// block registry never disagree.
pub struct Flowsheet {
    pub(crate) params: FlowsheetParameters,
    pub(crate) config: SolverConfig,
    pub(crate) blocks: BTreeMap<BlockId, Box<dyn FlowBlock>>,
    pub(crate) topology: Topology,
    factory: BlockFactory,
    pub(crate) last_iterations: usize,
}

impl Default for Flowsheet {
    fn default() -> Self {
        Self::new(ProcessSettings::default(), SolverConfig::default())
    }
}

impl fmt::Debug for Flowsheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flowsheet")
            .field("settings", &self.params.settings)
            .field("config", &self.config)
            .field("blocks", &self.blocks.keys().collect::<Vec<_>>())
            .field("topology", &self.topology)
            .finish()
    }
}

impl Flowsheet {
    pub fn new(settings: ProcessSettings, config: SolverConfig) -> Self {
        Self {
            params: FlowsheetParameters::new(settings),
            config,
            blocks: BTreeMap::new(),
            topology: Topology::new(),
            factory: BlockFactory::default(),
            last_iterations: 0,
        }
    }

    // ---- configuration ----

    pub fn settings(&self) -> &ProcessSettings {
        &self.params.settings
    }

    pub fn set_settings(&mut self, settings: ProcessSettings) {
        self.params.settings = settings;
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.params.settings.unit_system = unit_system;
    }

    pub fn set_water_round_to(&mut self, granularity: i64) {
        self.params.settings.water_round_to = granularity;
    }

    pub fn set_update_solids(&mut self, on: bool) {
        self.params.settings.update_solids = on;
    }

    pub fn set_update_water(&mut self, on: bool) {
        self.params.settings.update_water = on;
    }

    pub fn set_tolerance(&mut self, tolerance: Real) {
        self.config.tolerance = tolerance;
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    // ---- size distribution ----

    pub fn distribution(&self) -> &SizeDistribution {
        &self.params.distribution
    }

    /// Load the size distribution from a file and re-size every block.
    ///
    /// The old table is dropped before reading; on failure the distribution
    /// stays empty and no block is notified.
    pub fn load_size_distribution(&mut self, path: impl AsRef<Path>) -> SolverResult<()> {
        self.params.distribution.load(path)?;
        self.notify_new_distribution();
        Ok(())
    }

    /// Install an in-memory size distribution and re-size every block.
    pub fn set_size_distribution(&mut self, distribution: SizeDistribution) {
        self.params.distribution = distribution;
        self.notify_new_distribution();
    }

    fn notify_new_distribution(&mut self) {
        debug!(
            fractions = self.params.distribution.len(),
            blocks = self.blocks.len(),
            "size distribution changed"
        );
        for block in self.blocks.values_mut() {
            block.on_new_size_distribution(&self.params.distribution);
        }
    }

    // ---- blocks ----

    /// Build and register a block of `kind`, returning its id.
    pub fn create_block(&mut self, kind: BlockKind) -> SolverResult<BlockId> {
        let block = self
            .factory
            .create_kind(kind, self.params.fraction_count())
            .ok_or(SolverError::IdsExhausted)?;
        Ok(self.register(block))
    }

    /// Build and register a block from its numeric kind tag.
    ///
    /// Returns `None` for unknown tags; no id is consumed.
    pub fn create_block_by_tag(&mut self, tag: u16) -> Option<BlockId> {
        let block = self.factory.create(tag, self.params.fraction_count())?;
        Some(self.register(block))
    }

    fn register(&mut self, block: Box<dyn FlowBlock>) -> BlockId {
        let id = block.id();
        debug!(block = %id, kind = %block.kind(), "created block");
        self.blocks.insert(id, block);
        id
    }

    /// Remove a block and every link into or out of it.
    pub fn remove_block(&mut self, id: BlockId) -> SolverResult<Box<dyn FlowBlock>> {
        let block = self
            .blocks
            .remove(&id)
            .ok_or(SolverError::UnknownBlock { id })?;
        let links = self.topology.remove_block(id);
        debug!(block = %id, links, "removed block");
        Ok(block)
    }

    /// Drop every block and link and restart ids. Settings and the size
    /// distribution are kept.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.topology.clear();
        self.factory.reset();
        self.last_iterations = 0;
    }

    pub fn block(&self, id: BlockId) -> Option<&dyn FlowBlock> {
        self.blocks.get(&id).map(|b| b.as_ref())
    }

    /// Flow on port `n` of block `id`.
    pub fn port(&self, id: BlockId, n: PortNo) -> SolverResult<&FlowData> {
        let block = self.block(id).ok_or(SolverError::UnknownBlock { id })?;
        Ok(block.port(n)?)
    }

    /// Registered block ids in ascending order.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.keys().copied()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    // ---- links and parameters ----

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Link output `port` of `from` to the input of `to`.
    ///
    /// Both blocks must exist. Duplicate links and cycles are accepted; a
    /// duplicate link counts its source twice.
    pub fn make_link(&mut self, from: BlockId, port: PortNo, to: BlockId) -> SolverResult<()> {
        for id in [from, to] {
            if !self.blocks.contains_key(&id) {
                return Err(SolverError::UnknownBlock { id });
            }
        }
        self.topology.link(from, port, to);
        debug!(%from, port, %to, "linked");
        Ok(())
    }

    /// Remove every link from `from:port` to `to`; returns how many went.
    pub fn break_link(&mut self, from: BlockId, port: PortNo, to: BlockId) -> usize {
        let removed = self.topology.unlink(from, port, to);
        debug!(%from, port, %to, removed, "unlinked");
        removed
    }

    /// Route a parameter set to the block it names.
    pub fn push_parameters(&mut self, params: &BlockParameters) -> SolverResult<ParameterOutcome> {
        let id = params.block;
        let block = self
            .blocks
            .get_mut(&id)
            .ok_or(SolverError::UnknownBlock { id })?;
        Ok(block.on_parameters(params))
    }

    /// Check the link indexes agree and every link joins registered blocks.
    pub fn validate(&self) -> SolverResult<()> {
        self.topology.validate()?;
        for link in self.topology.links() {
            for id in [link.from, link.to] {
                if !self.blocks.contains_key(&id) {
                    return Err(SolverError::UnknownBlock { id });
                }
            }
        }
        Ok(())
    }

    /// Passes used by the most recent solve.
    pub fn last_iterations(&self) -> usize {
        self.last_iterations
    }
}
