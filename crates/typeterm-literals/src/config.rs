//! Canonicalizer configuration.

use crate::radix::RADIX_CEILING;

/// Configuration for literal canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralConfig {
    /// Largest radix a literal may declare.
    ///
    /// Defaults to [`RADIX_CEILING`]. A smaller value narrows what the
    /// canonicalizer accepts; values above the ceiling are treated as the
    /// ceiling, since no digit alphabet exists past `z`.
    pub max_radix: u32,
}

impl LiteralConfig {
    /// Returns the largest radix actually accepted.
    #[must_use]
    pub fn effective_max_radix(&self) -> u32 {
        self.max_radix.min(RADIX_CEILING)
    }
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            max_radix: RADIX_CEILING,
        }
    }
}
