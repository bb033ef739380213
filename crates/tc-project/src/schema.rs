//! Engine definition schema.

use serde::{Deserialize, Serialize};

fn default_unity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineProject {
    pub version: u32,
    pub name: String,
    pub engine: EngineDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineDef {
    pub fuel: FuelDef,
    pub turbine: TurbineDef,
    pub compressor: SpoolStageDef,
    pub fan: SpoolStageDef,
    #[serde(default)]
    pub pressure_losses: PressureLossesDef,
    #[serde(default)]
    pub burner: BurnerDef,
    pub bypass_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_pressure_ratios: Option<ExitPressureRatiosDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelDef {
    /// Heating value [J/kg]
    pub heating_value: f64,
    /// Ratio of specific heats of the combustion products
    pub gamma: f64,
    /// Specific heat of the combustion products [J/(kg K)]
    pub heat_capacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbineDef {
    /// Inlet total temperature [K]
    pub inlet_total_temperature: f64,
    #[serde(default = "default_unity")]
    pub polytropic_efficiency: f64,
    #[serde(default = "default_unity")]
    pub mechanical_efficiency: f64,
}

/// Compressor or fan stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpoolStageDef {
    pub compression_ratio: f64,
    #[serde(default = "default_unity")]
    pub polytropic_efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PressureLossesDef {
    #[serde(default = "default_unity")]
    pub diffuser_max: f64,
    #[serde(default = "default_unity")]
    pub fan_nozzle: f64,
    #[serde(default = "default_unity")]
    pub core_nozzle: f64,
}

impl Default for PressureLossesDef {
    fn default() -> Self {
        Self {
            diffuser_max: 1.0,
            fan_nozzle: 1.0,
            core_nozzle: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BurnerDef {
    #[serde(default = "default_unity")]
    pub total_pressure_ratio: f64,
    #[serde(default = "default_unity")]
    pub efficiency: f64,
}

impl Default for BurnerDef {
    fn default() -> Self {
        Self {
            total_pressure_ratio: 1.0,
            efficiency: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExitPressureRatiosDef {
    /// Ambient static to core-exit static pressure ratio
    pub ambient_to_core_exit: f64,
    /// Ambient static to fan-exit static pressure ratio
    pub ambient_to_fan_exit: f64,
}
