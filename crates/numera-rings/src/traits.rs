//! The arithmetic contract shared by every numeric value type.
//!
//! Generic algorithms are written against [`Arithmetic`] and dispatched
//! statically; they never inspect the concrete type behind it.

use numera_integers::ArithmeticError;

/// The four basic operations, each producing a new value of the same type.
///
/// # Laws
///
/// - Operations are pure: neither operand is observably modified
/// - `add`, `subtract` and `multiply` are total
/// - `divide` fails with [`ArithmeticError::DivisionByZero`] exactly when
///   `rhs` is the additive identity
pub trait Arithmetic: Sized {
    /// Computes `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// Computes `self - rhs`.
    fn subtract(&self, rhs: &Self) -> Self;

    /// Computes `self * rhs`.
    fn multiply(&self, rhs: &Self) -> Self;

    /// Computes `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    /// Computes `self * self`.
    fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Computes `self + self`.
    fn double(&self) -> Self {
        self.add(self)
    }
}

/// Equality up to the rounding behaviour of the underlying representation.
///
/// Rounding error in a computed value follows the size of the terms it was
/// computed from, not the size of the result, so callers pass that size in
/// as `scale`. Exact types ignore both tolerance and scale.
pub trait ApproxEq {
    /// Returns the absolute value of `self` as an f64.
    fn magnitude(&self) -> f64;

    /// Returns true if `self` and `other` differ by at most
    /// `tolerance * max(scale, |self|, |other|, 1)`.
    fn approx_eq_scaled(&self, other: &Self, tolerance: f64, scale: f64) -> bool;

    /// Returns true if `self` and `other` agree within `tolerance`, relative
    /// to their own magnitudes.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.approx_eq_scaled(other, tolerance, 1.0)
    }
}
