use thiserror::Error;

pub type TcResult<T> = Result<T, TcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Shape mismatch for {what}: expected {expected} elements, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
