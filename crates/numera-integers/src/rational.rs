//! Exact rational numbers.
//!
//! A `Rational` is a numerator/denominator pair of [`Integer`]s that is
//! normalized once, at construction, and never mutated afterwards.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ArithmeticError, Result};
use crate::Integer;

/// An exact rational number.
///
/// Always stored in lowest terms with a strictly positive denominator, so
/// zero is `0/1` and structural equality coincides with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a rational from a raw numerator and denominator.
    ///
    /// Both are divided by their gcd and the sign is moved to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    // Callers guarantee a non-zero denominator.
    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        let g = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = if g.is_one() {
            (numerator, denominator)
        } else {
            (numerator / g.clone(), denominator / g)
        };
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator of the canonical form.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator of the canonical form. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if this rational is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduce(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        // Powers of coprime integers stay coprime.
        Self {
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    /// Approximates this rational as an f64.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::from_integer(Integer::zero())
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cross-multiplication; valid because both denominators are positive.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
