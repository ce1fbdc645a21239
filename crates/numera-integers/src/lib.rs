//! # numera-integers
//!
//! Arbitrary precision integer and exact rational arithmetic for Numera.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals in canonical form (`Rational`)
//! - The single arithmetic failure, `ArithmeticError::DivisionByZero`
//!
//! Rationals are normalized at construction: lowest terms, positive
//! denominator, zero as `0/1`. Every operation returns a fresh value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
