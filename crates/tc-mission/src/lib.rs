//! tc-mission: airframe bookkeeping and mission-segment integration.
//!
//! Provides:
//! - `Aircraft`: mass and drag-polar bookkeeping for a fixed-wing airframe
//! - `Mission`: time integration of takeoff, cruise, and landing segments,
//!   calling the cycle engine once per step for thrust and fuel consumption
//!
//! This is thin orchestration over `tc-cycle`; all engine physics lives
//! there.

pub mod aircraft;
pub mod error;
pub mod mission;

pub use aircraft::{Aircraft, FlightMode, LoadFactors};
pub use error::{MissionError, MissionResult};
pub use mission::{Mission, StepOptions, StepOutcome};
