//! Schema migration framework.

use crate::ProjectError;
use crate::schema::FlowsheetDef;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut def: FlowsheetDef) -> Result<FlowsheetDef, ProjectError> {
    while def.version < LATEST_VERSION {
        def = migrate_one_version(def)?;
    }
    Ok(def)
}

fn migrate_one_version(def: FlowsheetDef) -> Result<FlowsheetDef, ProjectError> {
    match def.version {
        0 => migrate_v0_to_v1(def),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Unversioned files share the v1 layout.
fn migrate_v0_to_v1(mut def: FlowsheetDef) -> Result<FlowsheetDef, ProjectError> {
    def.version = 1;
    Ok(def)
}
