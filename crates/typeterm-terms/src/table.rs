//! Keying and deduplicating terms.
//!
//! A type checker that needs a dense integer per distinct term interns it
//! into a [`TermTable`]. Lookups hash through the term's cached structural
//! hash, so repeated interning of a large term is cheap.

use std::fmt;
use std::hash::Hash;

use hashbrown::HashMap;
use tracing::trace;

/// Dense identifier of a term interned in a [`TermTable`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId(u32);

impl TermId {
    /// Returns the position of the term in its table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({})", self.0)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interns structurally equal terms to the same [`TermId`].
///
/// Ids are handed out in first-seen order starting at zero.
#[derive(Debug, Clone)]
pub struct TermTable<T> {
    ids: HashMap<T, TermId>,
    terms: Vec<T>,
}

impl<T: Clone + Eq + Hash> Default for TermTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> TermTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            terms: Vec::new(),
        }
    }

    /// Creates a table with room for `capacity` terms.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Interns `term`, returning its id.
    ///
    /// A term equal to one already in the table gets the existing id.
    #[allow(clippy::cast_possible_truncation)]
    pub fn intern(&mut self, term: T) -> TermId {
        if let Some(&id) = self.ids.get(&term) {
            return id;
        }
        let id = TermId(self.terms.len() as u32);
        trace!(id = id.0, "interned new term");
        self.ids.insert(term.clone(), id);
        self.terms.push(term);
        id
    }

    /// Returns the term with the given id.
    #[must_use]
    pub fn get(&self, id: TermId) -> Option<&T> {
        self.terms.get(id.index())
    }

    /// Returns the id of `term`, if it has been interned.
    #[must_use]
    pub fn id_of(&self, term: &T) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Returns the number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in id order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &T)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, term)| (TermId(i as u32), term))
    }
}

/// Sorts `terms` by the structural order and drops duplicates.
///
/// The result is independent of input order, which makes it suitable for
/// printing sets of terms in diagnostics.
#[must_use]
pub fn sorted_unique<T: Ord>(terms: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = terms.into_iter().collect();
    out.sort();
    out.dedup();
    out
}
