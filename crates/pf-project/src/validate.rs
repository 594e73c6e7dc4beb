//! Flowsheet definition validation.

use std::collections::{HashMap, HashSet};

use pf_blocks::{BlockKind, KindParameters};
use pf_core::Real;

use crate::schema::{BlockDef, FlowsheetDef, SizeDistributionDef};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Block '{id}' is a {kind} but has {params} parameters")]
    ParameterMismatch {
        id: String,
        kind: BlockKind,
        params: BlockKind,
    },

    #[error("Link from '{id}' uses port {port} but a {kind} has {count} ports")]
    PortOutOfRange {
        id: String,
        kind: BlockKind,
        port: u16,
        count: usize,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_definition(def: &FlowsheetDef) -> Result<(), ValidationError> {
    if def.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    validate_solver(def)?;
    if let Some(dist) = &def.size_distribution {
        validate_distribution(dist)?;
    }

    let mut kinds: HashMap<&str, BlockKind> = HashMap::new();
    let mut seen = HashSet::new();
    for block in &def.blocks {
        if block.id.trim().is_empty() {
            return Err(invalid("block id", &block.id, "must not be empty"));
        }
        if !seen.insert(block.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: block.id.clone(),
                context: "blocks".to_string(),
            });
        }
        validate_block(block)?;
        kinds.insert(block.id.as_str(), block.kind);
    }

    for link in &def.links {
        let Some(&from_kind) = kinds.get(link.from.as_str()) else {
            return Err(ValidationError::MissingReference {
                id: link.from.clone(),
                context: "link from".to_string(),
            });
        };
        if !kinds.contains_key(link.to.as_str()) {
            return Err(ValidationError::MissingReference {
                id: link.to.clone(),
                context: "link to".to_string(),
            });
        }
        let count = from_kind.port_count();
        if usize::from(link.port) >= count {
            return Err(ValidationError::PortOutOfRange {
                id: link.from.clone(),
                kind: from_kind,
                port: link.port,
                count,
            });
        }
    }

    Ok(())
}

fn validate_solver(def: &FlowsheetDef) -> Result<(), ValidationError> {
    let tol = def.solver.tolerance;
    if !tol.is_finite() || tol < 0.0 {
        return Err(invalid("solver.tolerance", tol, "must be finite and non-negative"));
    }
    if def.settings.water_round_to < 0 {
        return Err(invalid(
            "settings.water_round_to",
            def.settings.water_round_to,
            "must not be negative",
        ));
    }
    Ok(())
}

fn validate_distribution(dist: &SizeDistributionDef) -> Result<(), ValidationError> {
    match dist {
        SizeDistributionDef::File { path } if path.trim().is_empty() => {
            Err(invalid("size_distribution.path", path, "must not be empty"))
        }
        SizeDistributionDef::File { .. } => Ok(()),
        SizeDistributionDef::Inline { fractions } => {
            for (i, f) in fractions.iter().enumerate() {
                if f.passing < f.retained {
                    return Err(invalid(
                        &format!("size_distribution.fractions[{i}]"),
                        f.passing,
                        "passing size below retained size",
                    ));
                }
            }
            Ok(())
        }
    }
}

fn validate_block(block: &BlockDef) -> Result<(), ValidationError> {
    let Some(params) = &block.params else {
        return Ok(());
    };
    if params.kind() != block.kind {
        return Err(ValidationError::ParameterMismatch {
            id: block.id.clone(),
            kind: block.kind,
            params: params.kind(),
        });
    }

    let field = |name: &str| format!("block '{}' {}", block.id, name);
    match *params {
        KindParameters::Feed {
            feed_rate,
            surface_moisture,
        } => {
            non_negative(&field("feed_rate"), feed_rate)?;
            moisture(&field("surface_moisture"), surface_moisture)?;
        }
        KindParameters::DeslimeSingleDeck {
            deck_moisture,
            cut_point,
            wash_water,
        } => {
            moisture(&field("deck_moisture"), deck_moisture)?;
            non_negative(&field("cut_point"), cut_point)?;
            non_negative(&field("wash_water"), wash_water)?;
        }
        KindParameters::DeslimeDoubleDeck {
            top_moisture,
            bottom_moisture,
            top_cut,
            bottom_cut,
            wash_water,
        } => {
            moisture(&field("top_moisture"), top_moisture)?;
            moisture(&field("bottom_moisture"), bottom_moisture)?;
            non_negative(&field("top_cut"), top_cut)?;
            non_negative(&field("bottom_cut"), bottom_cut)?;
            non_negative(&field("wash_water"), wash_water)?;
            if bottom_cut > top_cut {
                return Err(invalid(
                    &field("bottom_cut"),
                    bottom_cut,
                    "bottom deck cut point above top deck cut point",
                ));
            }
        }
        KindParameters::SumpPump { add_water } => {
            non_negative(&field("add_water"), add_water)?;
        }
    }
    Ok(())
}

fn non_negative(field: &str, value: Real) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, value, "must be finite and non-negative"));
    }
    Ok(())
}

/// Surface moisture of 1 would leave no solids to carry the water.
fn moisture(field: &str, value: Real) -> Result<(), ValidationError> {
    if !(0.0..1.0).contains(&value) {
        return Err(invalid(field, value, "must be in [0, 1)"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
