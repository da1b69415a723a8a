//! Arbitrary precision natural numbers.
//!
//! Naturals carry natural-number static arguments (array bounds, generic
//! naturals) and the numerators of fixed-point literals.

use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

use crate::ParseError;

/// An arbitrary precision non-negative integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Natural(UBig);

impl Natural {
    /// Creates a natural from a u64.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(UBig::from(value))
    }

    /// Parses a digit string in the given radix.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is empty or holds a character that is
    /// not a digit of `radix`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ParseError> {
        UBig::from_str_radix(digits, radix).map(Self)
    }

    /// Computes `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Divides by `divisor` if it divides exactly.
    ///
    /// Returns `None` when the remainder is non-zero or `divisor` is zero.
    #[must_use]
    pub fn exact_div(&self, divisor: u32) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let divisor = UBig::from(divisor);
        if (&self.0 % &divisor) == UBig::ZERO {
            Some(Self(&self.0 / &divisor))
        } else {
            None
        }
    }

    /// Formats the value in the given radix (lowercase letters).
    #[must_use]
    pub fn to_string_radix(&self, radix: u32) -> String {
        self.0.in_radix(radix).to_string()
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Returns a reference to the inner `dashu::UBig`.
    #[must_use]
    pub fn as_inner(&self) -> &UBig {
        &self.0
    }

    /// Returns the inner `dashu::UBig`.
    #[must_use]
    pub fn into_inner(self) -> UBig {
        self.0
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }
}

impl One for Natural {
    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self(UBig::from(value))
    }
}

impl From<UBig> for Natural {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}
