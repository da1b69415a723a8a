//! Write-once storage for memoized hashes.
//!
//! Terms are immutable, so their structural hash never changes once
//! computed. `HashCell` stores it in a single `AtomicU64`: the first reader
//! computes and publishes it, later readers load it. Two threads racing on
//! the first computation both store the same value, and a 64-bit atomic
//! store cannot be observed half-written, so no lock is needed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Marks a cell whose hash has not been computed.
const UNSET: u64 = 0;

/// Stand-in stored when a hash function genuinely yields `UNSET`.
const ZERO_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

/// A lazily filled, lock-free hash cache.
pub struct HashCell(AtomicU64);

impl HashCell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(UNSET))
    }

    /// Returns the cached hash, computing and storing it on first use.
    ///
    /// `compute` must be pure: every call has to return the same value.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        let cached = self.0.load(Ordering::Relaxed);
        if cached != UNSET {
            return cached;
        }
        let hash = match compute() {
            UNSET => ZERO_HASH,
            hash => hash,
        };
        self.0.store(hash, Ordering::Relaxed);
        hash
    }

    /// Returns the cached hash if it has been computed.
    #[must_use]
    pub fn peek(&self) -> Option<u64> {
        match self.0.load(Ordering::Relaxed) {
            UNSET => None,
            hash => Some(hash),
        }
    }
}

impl Default for HashCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HashCell {
    fn clone(&self) -> Self {
        Self(AtomicU64::new(self.0.load(Ordering::Relaxed)))
    }
}

impl fmt::Debug for HashCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(hash) => write!(f, "HashCell({hash:#018x})"),
            None => write!(f, "HashCell(<unset>)"),
        }
    }
}
