//! Index agreement checks.

use std::collections::BTreeMap;

use pf_core::BlockId;

use crate::error::{GraphError, GraphResult};
use crate::topology::Topology;

/// Both indexes must describe the same multiset of `(from, to)` pairs.
pub(crate) fn validate_topology(topo: &Topology) -> GraphResult<()> {
    let mut balance: BTreeMap<(BlockId, BlockId), i64> = BTreeMap::new();

    for link in topo.links() {
        *balance.entry((link.from, link.to)).or_default() += 1;
    }
    for (from, to) in topo.destination_pairs() {
        *balance.entry((from, to)).or_default() -= 1;
    }

    for ((from, to), count) in balance {
        if count > 0 {
            return Err(GraphError::MissingDestination { from, to });
        }
        if count < 0 {
            return Err(GraphError::MissingSource { from, to });
        }
    }
    Ok(())
}
