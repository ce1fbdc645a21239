//! # numera-rings
//!
//! The arithmetic contract for Numera and its fixed-precision complex type.
//!
//! This crate provides:
//! - The `Arithmetic` contract: add, subtract, multiply, divide
//! - `ApproxEq` for comparing results across exact and rounded types
//! - `Complex`, a complex number over `f64`
//! - The contract implementation for `numera_integers::Rational`
//!
//! ## Dispatch
//!
//! ```text
//! Arithmetic
//!  ├── Rational  (exact, numera-integers)
//!  └── Complex   (f64 components)
//! ```
//!
//! Code generic over `T: Arithmetic` is monomorphized per type; nothing is
//! boxed or downcast.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use numera_integers::{ArithmeticError, Integer, Rational};
pub use traits::{ApproxEq, Arithmetic};
