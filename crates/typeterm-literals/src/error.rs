//! Literal decoding errors.

use thiserror::Error;

/// Literal text the grammar should never have produced.
///
/// Every variant is a parser contract violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The literal text was empty.
    #[error("empty literal")]
    Empty,

    /// The literal does not have the `digits[.digits][_radix]` shape.
    #[error("malformed literal `{0}`")]
    Malformed(String),

    /// The radix suffix is neither a decimal numeral nor a radix name.
    #[error("malformed radix suffix `{0}`")]
    MalformedRadix(String),

    /// The radix is outside the accepted range.
    #[error("unsupported radix {radix} (accepted: 2..={max})")]
    UnsupportedRadix {
        /// The declared radix.
        radix: u32,
        /// The largest accepted radix.
        max: u32,
    },

    /// A digit string holds a character that is not a digit of its radix.
    #[error("invalid digits `{digits}` for radix {radix}")]
    InvalidDigits {
        /// The offending digit string, after dozenal substitution.
        digits: String,
        /// The radix it was parsed in.
        radix: u32,
    },

    /// A fraction was given a denominator base below two.
    #[error("invalid denominator base {0}")]
    InvalidDenominatorBase(u32),

    /// A fraction was attached to a negative integer part.
    ///
    /// Literal text carries no sign, and `-1 + 0.5` has no digit spelling
    /// that keeps the quadruple's meaning.
    #[error("fractional part on negative integer part {0}")]
    SignedFraction(String),

    /// A fraction's numerator is not below `base^power`.
    #[error("numerator does not fit in {power} digit(s) of radix {base}")]
    ImproperFraction {
        /// The denominator base.
        base: u32,
        /// The denominator power.
        power: u32,
    },
}
