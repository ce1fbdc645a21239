//! Identity check failures.

use thiserror::Error;

/// Errors reported by [`Verifier`](crate::Verifier) checks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The two sides of the identity disagree.
    #[error("{identity} does not hold: expected {expected}, got {actual}")]
    Mismatch {
        /// The identity being checked.
        identity: &'static str,
        /// The rendered left-hand side.
        expected: String,
        /// The rendered right-hand side.
        actual: String,
    },

    /// One side of the identity could not be computed.
    #[error("{identity} is undefined: division by zero")]
    Undefined {
        /// The identity being checked.
        identity: &'static str,
    },
}
