//! Turning a definition into a live flowsheet.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pf_blocks::{BlockParameters, ParameterOutcome};
use pf_core::BlockId;
use pf_solver::Flowsheet;
use tracing::debug;

use crate::schema::{FlowsheetDef, FractionDef, SizeDistributionDef};
use crate::validate::validate_definition;
use crate::{ProjectError, ProjectResult};

/// A built flowsheet together with the ids its blocks were given.
#[derive(Debug)]
pub struct BuiltFlowsheet {
    pub flowsheet: Flowsheet,
    pub ids: BTreeMap<String, BlockId>,
}

impl BuiltFlowsheet {
    /// The flowsheet id of a block named in the definition.
    pub fn id(&self, name: &str) -> Option<BlockId> {
        self.ids.get(name).copied()
    }
}

/// Validate `def` and build it: load the size distribution, create the
/// blocks in definition order, make the links and push the parameters.
///
/// A relative distribution path is resolved against `base_dir` when given.
pub fn build_flowsheet(def: &FlowsheetDef, base_dir: Option<&Path>) -> ProjectResult<BuiltFlowsheet> {
    validate_definition(def)?;

    let mut flowsheet = Flowsheet::new(def.settings, def.solver);
    match &def.size_distribution {
        Some(SizeDistributionDef::File { path }) => {
            let path = resolve(path, base_dir);
            flowsheet.load_size_distribution(&path)?;
        }
        Some(SizeDistributionDef::Inline { fractions }) => {
            flowsheet.set_size_distribution(FractionDef::to_distribution(fractions));
        }
        None => {}
    }

    let mut ids = BTreeMap::new();
    for block in &def.blocks {
        let id = flowsheet.create_block(block.kind)?;
        ids.insert(block.id.clone(), id);
    }

    let lookup = |name: &str| {
        ids.get(name).copied().ok_or_else(|| ProjectError::Build {
            what: format!("block '{name}' was not created"),
        })
    };

    for link in &def.links {
        flowsheet.make_link(lookup(&link.from)?, link.port, lookup(&link.to)?)?;
    }

    for block in &def.blocks {
        let Some(settings) = &block.params else {
            continue;
        };
        let params = BlockParameters::new(lookup(&block.id)?, settings.clone());
        if flowsheet.push_parameters(&params)? == ParameterOutcome::Ignored {
            return Err(ProjectError::Build {
                what: format!("block '{}' ignored its parameters", block.id),
            });
        }
    }

    debug!(
        name = %def.name,
        blocks = ids.len(),
        links = def.links.len(),
        "built flowsheet"
    );
    Ok(BuiltFlowsheet { flowsheet, ids })
}

fn resolve(path: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(path);
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}
