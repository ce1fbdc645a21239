//! Identity checks that turn a failed comparison into an error.

use std::fmt;

use numera_rings::{ApproxEq, Arithmetic};

use crate::config::VerifierConfig;
use crate::difference_of_squares::{difference_of_squares, DifferenceOfSquares, DIFFERENCE_OF_SQUARES};
use crate::error::IdentityError;
use crate::square_of_sum::{square_of_sum, SquareOfSum, SQUARE_OF_SUM};

/// Runs identity checks with a fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// Creates a verifier.
    #[must_use]
    pub const fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Checks `(a + b)^2 = a^2 + 2ab + b^2`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Mismatch`] if the two sides disagree.
    pub fn check_square_of_sum<T>(&self, a: &T, b: &T) -> Result<SquareOfSum<T>, IdentityError>
    where
        T: Arithmetic + ApproxEq + Clone + fmt::Display,
    {
        let report = square_of_sum(a, b);
        if report.holds(self.config.tolerance) {
            return Ok(report);
        }
        tracing::warn!(identity = SQUARE_OF_SUM, lhs = %report.sum_squared, rhs = %report.expanded, "identity does not hold");
        Err(IdentityError::Mismatch {
            identity: SQUARE_OF_SUM,
            expected: report.sum_squared.to_string(),
            actual: report.expanded.to_string(),
        })
    }

    /// Checks `(a^2 - b^2) / (a + b) = a - b`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Undefined`] if `a + b` is zero and
    /// [`IdentityError::Mismatch`] if the quotient differs from `a - b`.
    pub fn check_difference_of_squares<T>(
        &self,
        a: &T,
        b: &T,
    ) -> Result<DifferenceOfSquares<T>, IdentityError>
    where
        T: Arithmetic + ApproxEq + Clone + fmt::Display,
    {
        let report = difference_of_squares(a, b);
        let Ok(quotient) = &report.quotient else {
            return Err(IdentityError::Undefined {
                identity: DIFFERENCE_OF_SQUARES,
            });
        };
        if report.holds(self.config.tolerance) == Some(true) {
            return Ok(report);
        }
        let actual = quotient.to_string();
        tracing::warn!(identity = DIFFERENCE_OF_SQUARES, expected = %report.difference, %actual, "identity does not hold");
        Err(IdentityError::Mismatch {
            identity: DIFFERENCE_OF_SQUARES,
            expected: report.difference.to_string(),
            actual,
        })
    }
}
