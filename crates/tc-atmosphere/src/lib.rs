//! tc-atmosphere: layered ISA standard atmosphere.
//!
//! Provides ambient temperature, pressure, density, and speed of sound as a
//! function of geopotential altitude, for scalar altitudes or whole flight
//! envelopes at once. The engine in `tc-cycle` consumes the output as a
//! plain data source and never depends on this crate.

pub mod isa;

pub use isa::{AtmosphereError, AtmosphereResult, AtmosphereState, IsaAtmosphere};
