//! pf-project: flowsheet definition files, validation and building.

pub mod build;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use build::{BuiltFlowsheet, build_flowsheet};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_definition};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Build error: {what}")]
    Build { what: String },

    #[error("Flowsheet error: {0}")]
    Solver(#[from] pf_solver::SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<FlowsheetDef> {
    let content = std::fs::read_to_string(path)?;
    let mut def: FlowsheetDef = serde_yaml::from_str(&content)?;
    def = migrate_to_latest(def)?;
    validate_definition(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &std::path::Path, def: &FlowsheetDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<FlowsheetDef> {
    let content = std::fs::read_to_string(path)?;
    let mut def: FlowsheetDef = serde_json::from_str(&content)?;
    def = migrate_to_latest(def)?;
    validate_definition(&def)?;
    Ok(def)
}

pub fn save_json(path: &std::path::Path, def: &FlowsheetDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a YAML definition and build it, resolving the size distribution
/// path against the file's directory.
pub fn load_flowsheet(path: &std::path::Path) -> ProjectResult<BuiltFlowsheet> {
    let def = load_yaml(path)?;
    build_flowsheet(&def, path.parent())
}
