//! tc-core: stable foundation for turbocycle.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (tolerances + float helpers)
//! - field (scalar-or-array numeric values with element-wise broadcast)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use field::Field;
pub use numeric::*;
pub use units::*;
