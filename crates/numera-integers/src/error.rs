//! The error raised by exact and fixed-precision arithmetic.

use thiserror::Error;

/// Errors that can occur during arithmetic on numeric values.
///
/// Division is the only partial operation, so there is exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// A divisor (or a rational denominator) was the additive identity.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result alias for fallible arithmetic.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
