//! The identity `(a^2 - b^2) / (a + b) = a - b`.

use std::fmt;

use numera_rings::{ApproxEq, Arithmetic, ArithmeticError};

/// Name used in logs and errors.
pub const DIFFERENCE_OF_SQUARES: &str = "(a^2-b^2)/(a+b) = a-b";

/// Every intermediate value of one evaluation of the identity.
///
/// The quotient is undefined when `a + b` is zero; that case is recorded
/// rather than propagated.
#[derive(Clone, Debug, PartialEq)]
pub struct DifferenceOfSquares<T> {
    /// The first operand.
    pub a: T,
    /// The second operand.
    pub b: T,
    /// `a - b`, the expected quotient.
    pub difference: T,
    /// `a^2`.
    pub a_squared: T,
    /// `b^2`.
    pub b_squared: T,
    /// `a^2 - b^2`.
    pub squares_difference: T,
    /// `a + b`, the divisor.
    pub sum: T,
    /// `(a^2 - b^2) / (a + b)`.
    pub quotient: Result<T, ArithmeticError>,
}

impl<T: ApproxEq> DifferenceOfSquares<T> {
    /// Returns whether the quotient matches `a - b` within `tolerance`, or
    /// `None` if the quotient is undefined.
    ///
    /// The tolerance is relative to `max(|a|, |b|)^2 / |a + b|`: the squares
    /// carry rounding error of the size of `a^2`, and dividing by `a + b`
    /// scales it by `1 / |a + b|`.
    #[must_use]
    pub fn holds(&self, tolerance: f64) -> Option<bool> {
        let quotient = self.quotient.as_ref().ok()?;
        let largest = self.a.magnitude().max(self.b.magnitude());
        let scale = (largest * largest / self.sum.magnitude()).max(largest);
        Some(quotient.approx_eq_scaled(&self.difference, tolerance, scale))
    }
}

/// Evaluates `a - b` and `(a^2 - b^2) / (a + b)`.
pub fn difference_of_squares<T>(a: &T, b: &T) -> DifferenceOfSquares<T>
where
    T: Arithmetic + Clone + fmt::Display,
{
    let difference = a.subtract(b);
    let a_squared = a.square();
    let b_squared = b.square();
    let squares_difference = a_squared.subtract(&b_squared);
    tracing::debug!(%a, %b, %difference, %a_squared, %b_squared, %squares_difference, "difference of squares: numerator");

    let sum = a.add(b);
    let quotient = match squares_difference.divide(&sum) {
        Ok(q) => {
            tracing::debug!(%sum, quotient = %q, "difference of squares: quotient");
            Ok(q)
        }
        Err(err) => {
            tracing::warn!(%a, %b, %sum, "difference of squares: a + b is zero, quotient undefined");
            Err(err)
        }
    };

    DifferenceOfSquares {
        a: a.clone(),
        b: b.clone(),
        difference,
        a_squared,
        b_squared,
        squares_difference,
        sum,
        quotient,
    }
}

impl<T: fmt::Display> fmt::Display for DifferenceOfSquares<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a = {}", self.a)?;
        writeln!(f, "b = {}", self.b)?;
        writeln!(f, "(a - b) = {}", self.difference)?;
        writeln!(f, "a^2 = {}", self.a_squared)?;
        writeln!(f, "b^2 = {}", self.b_squared)?;
        writeln!(f, "(a^2 - b^2) = {}", self.squares_difference)?;
        writeln!(f, "(a + b) = {}", self.sum)?;
        match &self.quotient {
            Ok(q) => write!(f, "(a^2 - b^2) / (a + b) = {q}"),
            Err(_) => write!(
                f,
                "Division by zero occurred when calculating (a^2 - b^2) / (a + b)"
            ),
        }
    }
}
