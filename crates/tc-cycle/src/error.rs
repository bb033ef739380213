//! Error types for engine configuration and cycle analysis.

use tc_core::TcError;
use thiserror::Error;

/// Errors surfaced by the cycle-analysis engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// A supplied value violates its documented domain.
    #[error("Invalid parameter {name} = {value}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// A required configuration attribute was never set.
    #[error("Missing configuration: {name} was never set")]
    MissingConfiguration { name: &'static str },

    /// `perform_analysis` called before a successful `initialize_problem`.
    #[error("Engine not initialized: call initialize_problem() before perform_analysis()")]
    NotInitialized,

    /// Flight-condition input outside its domain.
    #[error("Invalid flight condition: {what} = {value}")]
    InvalidFlightCondition { what: &'static str, value: f64 },

    /// A result getter called before a successful analysis.
    #[error("Result not available: run perform_analysis() before reading {what}")]
    ResultNotAvailable { what: &'static str },

    /// Array-valued inputs disagree in length.
    #[error("Shape mismatch for {what}: expected {expected} elements, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type CycleResult<T> = Result<T, CycleError>;

// The solver's element-wise operations surface shape errors; a non-finite
// input quantity is an invalid flight condition.
impl From<TcError> for CycleError {
    fn from(e: TcError) -> Self {
        match e {
            TcError::ShapeMismatch {
                what,
                expected,
                got,
            } => CycleError::ShapeMismatch {
                what,
                expected,
                got,
            },
            TcError::NonFinite { what, value } => {
                CycleError::InvalidFlightCondition { what, value }
            }
        }
    }
}
