//! tc-gas: perfect-gas property relations for turbocycle.
//!
//! Provides:
//! - `GasProperties`: a (gamma, c_p, R) bundle with the standard-air default
//! - Compressible-flow relations: stagnation temperature/pressure ratios,
//!   inlet ram recovery, sonic speed
//!
//! All relations are pure functions of their arguments; array-valued inputs
//! are handled by mapping over `tc_core::Field` elements.

pub mod properties;
pub mod relations;

// Re-exports
pub use properties::GasProperties;
pub use relations::{
    gas_constant, heat_capacity, ram_recovery, sonic_speed, stagnation_pressure_ratio,
    stagnation_temperature_ratio,
};
