//! Equality and hashing.
//!
//! Equality is the ordering engine's `Equal`, so the two can never disagree.
//! The structural hash is the derived `Hash` of a node's kind fed into an
//! [`FxHasher`]. Child terms contribute their own cached hash, so hashing a
//! tree visits each node once over its lifetime.
//!
//! Equal terms always hash alike: the derived `Hash` covers every field the
//! order inspects.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::static_arg::StaticArg;
use crate::type_term::TypeTerm;

/// Hashes `value` with a fresh [`FxHasher`].
pub(crate) fn fx_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Returns `true` when both hashes are cached and differ.
fn cached_mismatch(a: Option<u64>, b: Option<u64>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x != y)
}

impl TypeTerm {
    /// Returns the structural hash, computing it on first use.
    ///
    /// The value is stable for the life of the process and is identical
    /// across threads.
    #[must_use]
    pub fn structural_hash(&self) -> u64 {
        self.hash_cell().get_or_compute(|| fx_hash(self.kind()))
    }
}

impl StaticArg {
    /// Returns the structural hash, computing it on first use.
    #[must_use]
    pub fn structural_hash(&self) -> u64 {
        self.hash_cell().get_or_compute(|| fx_hash(self.kind()))
    }
}

impl PartialEq for TypeTerm {
    fn eq(&self, other: &Self) -> bool {
        if TypeTerm::ptr_eq(self, other) {
            return true;
        }
        if cached_mismatch(self.hash_cell().peek(), other.hash_cell().peek()) {
            return false;
        }
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TypeTerm {}

impl Hash for TypeTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl PartialEq for StaticArg {
    fn eq(&self, other: &Self) -> bool {
        if StaticArg::ptr_eq(self, other) {
            return true;
        }
        if cached_mismatch(self.hash_cell().peek(), other.hash_cell().peek()) {
            return false;
        }
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for StaticArg {}

impl Hash for StaticArg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
