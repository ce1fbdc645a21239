//! Fixed-precision complex numbers.
//!
//! Both components are IEEE-754 doubles. There is no normalization; NaN and
//! infinities propagate by the usual floating-point rules.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use numera_integers::ArithmeticError;

use crate::traits::{ApproxEq, Arithmetic};

/// A complex number with `f64` components.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Creates a complex number from its components, stored unchanged.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns the real part.
    #[must_use]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Returns `re² + im²`.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Divides by another complex number.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs.re² + rhs.im²`
    /// evaluates to zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let denom = rhs.norm_sqr();
        if denom == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        ))
    }
}

/// Renders as `<re> + <im>i`, without special-casing a negative imaginary part.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Arithmetic for Complex {
    fn add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    fn subtract(&self, rhs: &Self) -> Self {
        *self - *rhs
    }

    fn multiply(&self, rhs: &Self) -> Self {
        *self * *rhs
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.checked_div(rhs)
    }
}

/// Componentwise, against a bound shared by both components.
impl ApproxEq for Complex {
    fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    fn approx_eq_scaled(&self, other: &Self, tolerance: f64, scale: f64) -> bool {
        let bound = tolerance
            * scale
                .max(self.magnitude())
                .max(other.magnitude())
                .max(1.0);
        (self.re - other.re).abs() <= bound && (self.im - other.im).abs() <= bound
    }
}
