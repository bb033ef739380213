//! Error types for mission integration.

use tc_atmosphere::AtmosphereError;
use tc_core::TcError;
use tc_cycle::CycleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MissionError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Fuel exhausted: step needs {needed:.1} kg, {remaining:.1} kg remaining")]
    FuelExhausted { needed: f64, remaining: f64 },

    #[error("Engine error: {0}")]
    Engine(#[from] CycleError),

    #[error("Atmosphere error: {0}")]
    Atmosphere(#[from] AtmosphereError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] TcError),
}

pub type MissionResult<T> = Result<T, MissionError>;
