//! Directed links between block ports.

use std::collections::BTreeMap;

use pf_core::{BlockId, PortNo};

use crate::error::GraphResult;
use crate::validate::validate_topology;

/// One upstream end of a link: a block and the output port it feeds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Source {
    pub block: BlockId,
    pub port: PortNo,
}

/// A directed link from `from:from_port` into the input port of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    pub from: BlockId,
    pub from_port: PortNo,
    pub to: BlockId,
}

/// Flowsheet connectivity.
///
/// Every link is recorded twice: as a `Source` in the list of the block it
/// feeds, and as a destination in the list of the block it leaves. Links
/// always land on input port 0. Duplicate links and cycles are allowed;
/// a duplicate link simply counts its source twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    sources: BTreeMap<BlockId, Vec<Source>>,
    destinations: BTreeMap<BlockId, Vec<BlockId>>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link from `from:port` to the input of `to`.
    pub fn link(&mut self, from: BlockId, port: PortNo, to: BlockId) {
        self.sources
            .entry(to)
            .or_default()
            .push(Source { block: from, port });
        self.destinations.entry(from).or_default().push(to);
    }

    /// Remove every link from `from:port` to `to`, returning how many went.
    ///
    /// Only as many destination entries are dropped as source entries were
    /// matched, so links between the same pair on other ports survive.
    pub fn unlink(&mut self, from: BlockId, port: PortNo, to: BlockId) -> usize {
        let wanted = Source { block: from, port };
        let mut removed = 0;
        if let Some(list) = self.sources.get_mut(&to) {
            let before = list.len();
            list.retain(|s| *s != wanted);
            removed = before - list.len();
        }
        if removed > 0 {
            if let Some(list) = self.destinations.get_mut(&from) {
                for _ in 0..removed {
                    remove_one(list, to);
                }
            }
        }
        self.prune();
        removed
    }

    /// Drop every link into or out of `id`, returning how many went.
    pub fn remove_block(&mut self, id: BlockId) -> usize {
        let removed = self.links().filter(|l| l.from == id || l.to == id).count();

        if let Some(feeds) = self.sources.remove(&id) {
            for s in feeds {
                if let Some(list) = self.destinations.get_mut(&s.block) {
                    remove_one(list, id);
                }
            }
        }
        if let Some(targets) = self.destinations.remove(&id) {
            for to in targets {
                if let Some(list) = self.sources.get_mut(&to) {
                    list.retain(|s| s.block != id);
                }
            }
        }
        self.prune();
        removed
    }

    pub fn clear(&mut self) {
        self.sources.clear();
        self.destinations.clear();
    }

    /// Blocks (and ports) feeding `id`, in link order.
    pub fn sources_of(&self, id: BlockId) -> &[Source] {
        self.sources.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Blocks `id` feeds, in link order.
    pub fn destinations_of(&self, id: BlockId) -> &[BlockId] {
        self.destinations.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Every link, ordered by destination block and then link order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.sources.iter().flat_map(|(&to, list)| {
            list.iter().map(move |s| Link {
                from: s.block,
                from_port: s.port,
                to,
            })
        })
    }

    pub fn link_count(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.link_count() == 0
    }

    /// Check that both indexes describe the same links.
    pub fn validate(&self) -> GraphResult<()> {
        validate_topology(self)
    }

    pub fn is_consistent(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn destination_pairs(&self) -> impl Iterator<Item = (BlockId, BlockId)> + '_ {
        self.destinations
            .iter()
            .flat_map(|(&from, list)| list.iter().map(move |&to| (from, to)))
    }

    fn prune(&mut self) {
        self.sources.retain(|_, list| !list.is_empty());
        self.destinations.retain(|_, list| !list.is_empty());
    }
}

fn remove_one(list: &mut Vec<BlockId>, id: BlockId) {
    if let Some(pos) = list.iter().position(|&b| b == id) {
        list.remove(pos);
    }
}
