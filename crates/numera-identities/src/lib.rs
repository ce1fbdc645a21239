//! # numera-identities
//!
//! Algebraic identity checks written once against
//! [`numera_rings::Arithmetic`] and run over any conforming type.
//!
//! - [`square_of_sum`]: `(a + b)^2 = a^2 + 2ab + b^2`
//! - [`difference_of_squares`]: `(a^2 - b^2) / (a + b) = a - b`
//!
//! Both return every intermediate value so callers can assert on them;
//! [`Verifier`] wraps them into pass/fail checks. Intermediate values are
//! logged at `debug` level through `tracing`.
//!
//! ```
//! use numera_identities::{square_of_sum, Verifier};
//! use numera_rings::{Complex, Rational};
//!
//! let a = Rational::from_i64(1, 3).unwrap();
//! let b = Rational::from_i64(1, 6).unwrap();
//! assert_eq!(square_of_sum(&a, &b).expanded.to_string(), "1/4");
//!
//! let verifier = Verifier::default();
//! assert!(verifier
//!     .check_difference_of_squares(&Complex::new(1.0, 3.0), &Complex::new(1.0, 6.0))
//!     .is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod difference_of_squares;
pub mod error;
pub mod square_of_sum;
pub mod verifier;

#[cfg(test)]
mod proptests;

pub use config::VerifierConfig;
pub use difference_of_squares::{difference_of_squares, DifferenceOfSquares};
pub use error::IdentityError;
pub use square_of_sum::{square_of_sum, SquareOfSum};
pub use verifier::Verifier;
