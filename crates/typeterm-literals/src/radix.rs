//! Radix suffixes and digit handling.
//!
//! A literal may end in `_` followed by its radix, spelled either as a
//! decimal numeral (`_16`) or as an English number name (`_sixteen`,
//! `_SIXTEEN`).

use std::borrow::Cow;

use tracing::debug;

use crate::error::LiteralError;

/// Radix of a literal without a suffix.
pub const DEFAULT_RADIX: u32 = 10;

/// Largest radix with a digit alphabet (`0-9a-z`).
pub const RADIX_CEILING: u32 = 36;

/// Radix names, indexed by value.
const RADIX_NAMES: [&str; 17] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Looks up a spelled-out radix, ignoring ASCII case.
#[must_use]
pub fn radix_from_name(name: &str) -> Option<u32> {
    RADIX_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .and_then(|value| u32::try_from(value).ok())
}

/// Resolves the text after `_` to a radix value.
///
/// A suffix containing no decimal digit is looked up by name; any other
/// suffix must be a decimal numeral in its entirety. The range of the
/// result is not checked here.
///
/// # Errors
///
/// Returns `LiteralError::MalformedRadix` if the suffix is neither.
pub fn resolve_radix_suffix(suffix: &str) -> Result<u32, LiteralError> {
    let resolved = if suffix.chars().any(|c| c.is_ascii_digit()) {
        suffix.parse::<u32>().ok()
    } else {
        radix_from_name(suffix)
    };
    resolved.ok_or_else(|| LiteralError::MalformedRadix(suffix.to_string()))
}

/// Rewrites dozenal digit letters.
///
/// In radix 12 the digits ten and eleven may be written `x`/`X` and
/// `e`/`E`; they are rewritten to `A` and `B` before parsing. Any other
/// radix, or a digit string without those letters, is returned unchanged.
#[must_use]
pub fn dozenal_substitution(digits: &str, radix: u32) -> Cow<'_, str> {
    if radix != 12 || !digits.contains(['x', 'X', 'e', 'E']) {
        return Cow::Borrowed(digits);
    }
    let rewritten: String = digits
        .chars()
        .map(|c| match c {
            'x' | 'X' => 'A',
            'e' | 'E' => 'B',
            other => other,
        })
        .collect();
    debug!(original = digits, %rewritten, "applied dozenal digit substitution");
    Cow::Owned(rewritten)
}
