//! Decoding literal text into canonical values.
//!
//! Literal text has the shape `digits[.digits][_radix]`. Decoding proceeds
//! in a fixed sequence:
//!
//! 1. Leading `0` digits are dropped, keeping at least one digit.
//! 2. The radix suffix, if any, is resolved (see [`crate::radix`]).
//! 3. Without a point, the digits are the integer part and the fraction is
//!    empty.
//! 4. With a point, trailing `0` digits of the fraction are dropped; an
//!    empty or `0` fraction is no fraction at all. Otherwise the remaining
//!    digits are the numerator over `radix^digit_count`.
//!
//! Every digit string goes through [`dozenal_substitution`] before it is
//! parsed.

use num_traits::Zero;
use tracing::trace;

use typeterm_integers::{Integer, Natural};

use crate::config::LiteralConfig;
use crate::error::LiteralError;
use crate::fixed_point::FixedPointLiteral;
use crate::radix::{dozenal_substitution, resolve_radix_suffix, DEFAULT_RADIX};

/// Decodes literal text under a [`LiteralConfig`].
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    config: LiteralConfig,
}

impl Canonicalizer {
    /// Creates a canonicalizer with the given configuration.
    #[must_use]
    pub fn new(config: LiteralConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &LiteralConfig {
        &self.config
    }

    /// Decodes a fixed-point (or integral) literal into its quadruple.
    ///
    /// # Errors
    ///
    /// Returns a [`LiteralError`] if the text is not a well-formed literal.
    pub fn fixed_point(&self, text: &str) -> Result<FixedPointLiteral, LiteralError> {
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }
        let stripped = strip_leading_zeros(text);
        let (body, radix) = self.split_radix(stripped)?;

        let Some((int_digits, frac_digits)) = body.split_once('.') else {
            let value = parse_digits(body, radix)?;
            trace!(text, radix, "decoded integral literal");
            return Ok(FixedPointLiteral::from_integer(Integer::from(value)));
        };

        let int_part = if int_digits.is_empty() {
            Integer::zero()
        } else {
            Integer::from(parse_digits(int_digits, radix)?)
        };

        let fraction = strip_trailing_zeros(frac_digits);
        if fraction.is_empty() || fraction == "0" {
            trace!(text, radix, "decoded literal with zero fraction");
            return Ok(FixedPointLiteral::from_integer(int_part));
        }

        let numerator = parse_digits(fraction, radix)?;
        let power =
            u32::try_from(fraction.len()).map_err(|_| LiteralError::Malformed(text.to_string()))?;
        trace!(text, radix, power, "decoded fixed-point literal");
        FixedPointLiteral::from_parts(int_part, numerator, radix, power)
    }

    /// Decodes an integer literal.
    ///
    /// # Errors
    ///
    /// Returns a [`LiteralError`] if the text is not a well-formed integer
    /// literal; a decimal point is rejected.
    pub fn integer(&self, text: &str) -> Result<Integer, LiteralError> {
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }
        let (digits, radix) = self.split_radix(text)?;
        if digits.contains('.') {
            return Err(LiteralError::Malformed(text.to_string()));
        }
        let value = parse_digits(digits, radix)?;
        trace!(text, radix, "decoded integer literal");
        Ok(Integer::from(value))
    }

    /// Splits off the radix suffix and checks the declared radix.
    fn split_radix<'a>(&self, text: &'a str) -> Result<(&'a str, u32), LiteralError> {
        let Some((body, suffix)) = text.split_once('_') else {
            return Ok((text, DEFAULT_RADIX));
        };
        let radix = resolve_radix_suffix(suffix)?;
        let max = self.config.effective_max_radix();
        if !(2..=max).contains(&radix) {
            return Err(LiteralError::UnsupportedRadix { radix, max });
        }
        Ok((body, radix))
    }
}

/// Decodes a fixed-point literal with the default configuration.
///
/// # Errors
///
/// See [`Canonicalizer::fixed_point`].
pub fn parse_fixed_point(text: &str) -> Result<FixedPointLiteral, LiteralError> {
    Canonicalizer::default().fixed_point(text)
}

/// Decodes an integer literal with the default configuration.
///
/// # Errors
///
/// See [`Canonicalizer::integer`].
pub fn parse_int_literal(text: &str) -> Result<Integer, LiteralError> {
    Canonicalizer::default().integer(text)
}

/// Drops leading `0`s while another digit follows.
fn strip_leading_zeros(text: &str) -> &str {
    let mut rest = text;
    while rest.starts_with('0') && rest[1..].starts_with(|c: char| c.is_ascii_alphanumeric()) {
        rest = &rest[1..];
    }
    rest
}

/// Drops trailing `0`s, keeping at least one character.
fn strip_trailing_zeros(digits: &str) -> &str {
    let mut rest = digits;
    while rest.len() > 1 && rest.ends_with('0') {
        rest = &rest[..rest.len() - 1];
    }
    rest
}

/// Parses a non-empty digit string in `radix`.
fn parse_digits(digits: &str, radix: u32) -> Result<Natural, LiteralError> {
    let digits = dozenal_substitution(digits, radix);
    let invalid = || LiteralError::InvalidDigits {
        digits: digits.to_string(),
        radix,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }
    Natural::from_str_radix(&digits, radix).map_err(|_| invalid())
}
