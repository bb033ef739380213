//! tc-cycle: steady-state turbofan cycle analysis.
//!
//! Provides:
//! - `TurbofanAnalysis`: engine configuration with validated setters, a
//!   completeness check, the fixed cycle-solver pipeline, and gated result
//!   getters
//! - `Ambient`: the per-call flight-condition input (atmosphere state)
//! - Result-group types (specific thrust, fuel consumption, efficiencies,
//!   operating ratios, nozzle exit states)
//!
//! Every quantity may be a scalar or an array-shaped `tc_core::Field`, so a
//! single analysis call can evaluate a whole flight envelope element-wise.
//!
//! # Example
//!
//! ```
//! use tc_cycle::{Ambient, TurbofanAnalysis};
//!
//! let mut engine = TurbofanAnalysis::new();
//! engine.set_fuel_properties(42.7984e6, 1.33, 1155.5568).unwrap();
//! engine.set_inlet_outlet_properties(0.99, 0.99, 0.99).unwrap();
//! engine.set_burner_properties(0.96, 0.99).unwrap();
//! engine.set_compressor_properties(36.0, 0.9).unwrap();
//! engine.set_fan_properties(1.7, 0.89).unwrap();
//! engine.set_turbine_properties(1666.67, 0.89, 0.99).unwrap();
//! engine.set_bypass_ratio(8.0).unwrap();
//! engine.initialize_problem().unwrap();
//!
//! // ISA conditions at 12 km, cruising at Mach 0.8.
//! let ambient = Ambient::new(216.65, 19_330.4, 295.07, 0.3108);
//! engine.perform_analysis(0.8 * 295.07, &ambient).unwrap();
//!
//! let thrust = engine.specific_thrust().unwrap();
//! assert!(thrust.total.as_scalar().unwrap() > 0.0);
//! ```

pub mod analysis;
pub mod error;
pub mod flight;
pub mod state;

mod solver;

// Re-exports
pub use analysis::TurbofanAnalysis;
pub use error::{CycleError, CycleResult};
pub use flight::Ambient;
pub use state::{
    CycleState, Efficiencies, FuelConsumption, NozzleExit, OperatingRatio, SpecificThrust,
};
