//! # Errors
//!
//! The two ways a calculator call can fail.

use thiserror::Error;

/// Calculator errors
///
/// Both kinds are raised regardless of stringify mode and are never
/// rendered as a result value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input rejected by the operation (zero divisor, negative radicand, wrong arity)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Name outside the calculator's method surface
    #[error("undefined operation `{0}` for Calculator")]
    UnsupportedOperation(String),
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
