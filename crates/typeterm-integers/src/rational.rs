//! Exact rational values.
//!
//! Fixed-point literals are canonical by construction; `Rational` is the
//! value they denote, used when a client needs numeric rather than
//! structural comparison.

use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::Zero;
use std::fmt;
use std::ops::Add;

use crate::{Integer, Natural};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from a numerator and a non-zero denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Natural) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner(),
        ))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Natural {
        Natural::from(self.0.denominator().clone())
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator() == &dashu::integer::UBig::ONE
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::from(IBig::ZERO))
    }

    fn is_zero(&self) -> bool {
        self.0.numerator() == &IBig::ZERO
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
