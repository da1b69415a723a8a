//! The canonical fixed-point quadruple.

use num_traits::Zero;
use std::fmt;

use typeterm_integers::{Integer, Natural, Rational};

use crate::error::LiteralError;
use crate::radix::{DEFAULT_RADIX, RADIX_CEILING};

/// A decoded fixed-point literal.
///
/// Represents `int_part + numerator / denominator_base^denominator_power`.
///
/// Invariants, upheld by every constructor:
/// - a zero numerator has `denominator_base == 1` and `denominator_power == 0`;
/// - a non-zero numerator has no trailing zero digit in its radix and
///   is below `denominator_base^denominator_power`.
///
/// Fields compare in declaration order, so the derived order, equality and
/// hash all see the same quadruple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedPointLiteral {
    int_part: Integer,
    numerator: Natural,
    denominator_base: u32,
    denominator_power: u32,
}

impl FixedPointLiteral {
    /// Creates a literal with no fractional part.
    #[must_use]
    pub fn from_integer(int_part: Integer) -> Self {
        Self {
            int_part,
            numerator: Natural::zero(),
            denominator_base: 1,
            denominator_power: 0,
        }
    }

    /// Builds a literal from an arbitrary quadruple, canonicalizing it.
    ///
    /// A zero numerator collapses to the integral form. Otherwise trailing
    /// zero digits are removed by dividing the numerator by the base while
    /// it divides exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-zero numerator comes with a negative
    /// `int_part`, with a base outside `2..=36`, or does not fit in
    /// `denominator_power` digits.
    pub fn from_parts(
        int_part: Integer,
        numerator: Natural,
        denominator_base: u32,
        denominator_power: u32,
    ) -> Result<Self, LiteralError> {
        if numerator.is_zero() {
            return Ok(Self::from_integer(int_part));
        }
        if int_part.is_negative() {
            return Err(LiteralError::SignedFraction(int_part.to_string()));
        }
        if !(2..=RADIX_CEILING).contains(&denominator_base) {
            return Err(LiteralError::InvalidDenominatorBase(denominator_base));
        }
        if numerator >= Natural::from(denominator_base).pow(denominator_power) {
            return Err(LiteralError::ImproperFraction {
                base: denominator_base,
                power: denominator_power,
            });
        }

        let mut numerator = numerator;
        let mut power = denominator_power;
        while let Some(reduced) = numerator.exact_div(denominator_base) {
            numerator = reduced;
            power -= 1;
        }

        Ok(Self {
            int_part,
            numerator,
            denominator_base,
            denominator_power: power,
        })
    }

    /// Returns the integer part.
    #[must_use]
    pub fn int_part(&self) -> &Integer {
        &self.int_part
    }

    /// Returns the fractional numerator.
    #[must_use]
    pub fn numerator(&self) -> &Natural {
        &self.numerator
    }

    /// Returns the radix of the fractional part (1 when there is none).
    #[must_use]
    pub fn denominator_base(&self) -> u32 {
        self.denominator_base
    }

    /// Returns the number of fractional digits (0 when there are none).
    #[must_use]
    pub fn denominator_power(&self) -> u32 {
        self.denominator_power
    }

    /// Returns true if the literal has no fractional part.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns the exact value the literal denotes.
    ///
    /// Unlike the quadruple, this identifies `0.8_16` with `0.5`.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        let whole = Rational::from_integer(self.int_part.clone());
        if self.is_integral() {
            return whole;
        }
        let denominator = Natural::from(self.denominator_base).pow(self.denominator_power);
        whole + Rational::new(Integer::from(self.numerator.clone()), denominator)
    }
}

impl Default for FixedPointLiteral {
    fn default() -> Self {
        Self::from_integer(Integer::zero())
    }
}

impl fmt::Display for FixedPointLiteral {
    /// Prints the literal in its own radix, e.g. `1.5` or `3.8_16`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            return write!(f, "{}", self.int_part);
        }
        let radix = self.denominator_base;
        let digits = self.numerator.to_string_radix(radix);
        let width = self.denominator_power as usize;
        write!(
            f,
            "{}.{digits:0>width$}",
            self.int_part.to_string_radix(radix)
        )?;
        if radix != DEFAULT_RADIX {
            write!(f, "_{radix}")?;
        }
        Ok(())
    }
}

impl From<Integer> for FixedPointLiteral {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
