//! The identity `(a + b)^2 = a^2 + 2ab + b^2`.

use std::fmt;

use numera_rings::{ApproxEq, Arithmetic};

/// Name used in logs and errors.
pub const SQUARE_OF_SUM: &str = "(a+b)^2 = a^2+2ab+b^2";

/// Every intermediate value of one evaluation of the identity.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareOfSum<T> {
    /// The first operand.
    pub a: T,
    /// The second operand.
    pub b: T,
    /// `a + b`.
    pub sum: T,
    /// `(a + b)^2`, the left-hand side.
    pub sum_squared: T,
    /// `a^2`.
    pub a_squared: T,
    /// `2ab`, computed as `ab + ab`.
    pub two_ab: T,
    /// `b^2`.
    pub b_squared: T,
    /// `a^2 + 2ab + b^2`, the right-hand side.
    pub expanded: T,
}

impl<T: ApproxEq> SquareOfSum<T> {
    /// Returns true if both sides agree within `tolerance`.
    ///
    /// The tolerance is relative to `(|a| + |b|)^2`, the size of the terms
    /// both sides are built from.
    #[must_use]
    pub fn holds(&self, tolerance: f64) -> bool {
        let scale = (self.a.magnitude() + self.b.magnitude()).powi(2);
        self.sum_squared
            .approx_eq_scaled(&self.expanded, tolerance, scale)
    }
}

/// Evaluates both sides of `(a + b)^2 = a^2 + 2ab + b^2`.
pub fn square_of_sum<T>(a: &T, b: &T) -> SquareOfSum<T>
where
    T: Arithmetic + Clone + fmt::Display,
{
    let sum = a.add(b);
    let sum_squared = sum.square();
    tracing::debug!(%a, %b, %sum, %sum_squared, "square of sum: left-hand side");

    let a_squared = a.square();
    let two_ab = a.multiply(b).double();
    let b_squared = b.square();
    let expanded = a_squared.add(&two_ab).add(&b_squared);
    tracing::debug!(%a_squared, %two_ab, %b_squared, %expanded, "square of sum: right-hand side");

    SquareOfSum {
        a: a.clone(),
        b: b.clone(),
        sum,
        sum_squared,
        a_squared,
        two_ab,
        b_squared,
        expanded,
    }
}

impl<T: fmt::Display> fmt::Display for SquareOfSum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a = {}", self.a)?;
        writeln!(f, "b = {}", self.b)?;
        writeln!(f, "(a + b) = {}", self.sum)?;
        writeln!(f, "(a+b)^2 = {}", self.sum_squared)?;
        writeln!(f, " = = = ")?;
        writeln!(f, "a^2 = {}", self.a_squared)?;
        writeln!(f, "2*a*b = {}", self.two_ab)?;
        writeln!(f, "b^2 = {}", self.b_squared)?;
        write!(f, "a^2+2ab+b^2 = {}", self.expanded)
    }
}
