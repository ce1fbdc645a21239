//! # Numera
//!
//! Exact rationals and fixed-precision complex numbers behind one generic
//! arithmetic contract.
//!
//! ## Features
//!
//! - **Exact Rationals**: big-integer numerator and denominator, always in
//!   lowest terms with a positive denominator
//! - **Complex Numbers**: `f64` components with IEEE-754 semantics
//! - **One Contract**: `Arithmetic` lets the same generic code run over both
//! - **Identity Checks**: algebraic identities evaluated step by step
//!
//! ## Quick Start
//!
//! ```rust
//! use numera::prelude::*;
//!
//! let a = Rational::from_i64(1, 3)?;
//! let b = Rational::from_i64(1, 6)?;
//! assert_eq!(a.add(&b).to_string(), "1/2");
//!
//! let z = Complex::new(1.0, 1.0);
//! assert_eq!(z.divide(&Complex::new(0.0, 0.0)), Err(ArithmeticError::DivisionByZero));
//! # Ok::<(), ArithmeticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numera_identities as identities;
pub use numera_integers as integers;
pub use numera_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numera_identities::{
        difference_of_squares, square_of_sum, IdentityError, Verifier, VerifierConfig,
    };
    pub use numera_integers::{ArithmeticError, Integer, Rational};
    pub use numera_rings::{ApproxEq, Arithmetic, Complex};
}
