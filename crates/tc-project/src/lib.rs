//! tc-project: engine definition files.
//!
//! Loads YAML engine definitions and applies them to a `TurbofanAnalysis`
//! through its validated setters, so every domain violation in a file
//! surfaces as the engine's own error.

pub mod schema;

use std::path::Path;

use tc_cycle::{CycleError, TurbofanAnalysis};
use thiserror::Error;

pub use schema::{
    BurnerDef, EngineDef, EngineProject, ExitPressureRatiosDef, FuelDef, PressureLossesDef,
    SpoolStageDef, TurbineDef,
};

/// Newest schema version this build understands.
pub const LATEST_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("I/O error reading engine definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error in engine definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error(transparent)]
    Cycle(#[from] CycleError),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Parse an engine definition from YAML text.
pub fn parse_engine(text: &str) -> ProjectResult<EngineProject> {
    let project: EngineProject = serde_yaml::from_str(text)?;
    if project.version > LATEST_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: project.version,
        });
    }
    Ok(project)
}

/// Read and parse an engine definition file.
pub fn load_engine(path: &Path) -> ProjectResult<EngineProject> {
    let text = std::fs::read_to_string(path)?;
    parse_engine(&text)
}

/// Apply a definition to a fresh engine and verify completeness.
pub fn build_analysis(project: &EngineProject) -> ProjectResult<TurbofanAnalysis> {
    let def = &project.engine;
    let mut engine = TurbofanAnalysis::new();

    engine.set_fuel_properties(def.fuel.heating_value, def.fuel.gamma, def.fuel.heat_capacity)?;
    engine.set_turbine_properties(
        def.turbine.inlet_total_temperature,
        def.turbine.polytropic_efficiency,
        def.turbine.mechanical_efficiency,
    )?;
    engine.set_compressor_properties(
        def.compressor.compression_ratio,
        def.compressor.polytropic_efficiency,
    )?;
    engine.set_fan_properties(def.fan.compression_ratio, def.fan.polytropic_efficiency)?;
    engine.set_inlet_outlet_properties(
        def.pressure_losses.diffuser_max,
        def.pressure_losses.fan_nozzle,
        def.pressure_losses.core_nozzle,
    )?;
    engine.set_burner_properties(def.burner.total_pressure_ratio, def.burner.efficiency)?;
    engine.set_bypass_ratio(def.bypass_ratio)?;
    if let Some(exit) = &def.exit_pressure_ratios {
        engine.set_exit_pressure_ratios(exit.ambient_to_core_exit, exit.ambient_to_fan_exit)?;
    }

    engine.initialize_problem()?;
    Ok(engine)
}

/// Parse-and-apply without keeping the engine; for `validate` commands.
pub fn validate_engine(project: &EngineProject) -> ProjectResult<()> {
    build_analysis(project).map(|_| ())
}
