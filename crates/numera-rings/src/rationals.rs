//! Exact rationals under the arithmetic contract.

use numera_integers::{ArithmeticError, Rational};

use crate::traits::{ApproxEq, Arithmetic};

impl Arithmetic for Rational {
    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn subtract(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn multiply(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_div(rhs)
    }
}

/// Rationals are exact; the tolerance is ignored.
impl ApproxEq for Rational {
    fn magnitude(&self) -> f64 {
        self.to_f64().abs()
    }

    fn approx_eq_scaled(&self, other: &Self, _tolerance: f64, _scale: f64) -> bool {
        self == other
    }
}
