//! Per-compilation state.
//!
//! Desugaring synthesizes terms that need names nobody can write in source.
//! The counter that makes them unique lives here, threaded through the
//! construction context by reference, so that two compilations (or two
//! tests) never observe each other's numbering.

use tracing::trace;

use crate::name::Name;

/// Prefix used by [`Session::fresh_temp`].
pub const TEMP_PREFIX: &str = "t";

/// A compilation session.
#[derive(Debug, Default)]
pub struct Session {
    temp_count: u32,
}

impl Session {
    /// Creates a session that has issued no names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh name of the form `prefix$N`.
    ///
    /// `N` starts at 1 and increases with every call on this session.
    /// The `$` cannot appear in a source identifier, so fresh names never
    /// capture user names.
    pub fn fresh_name(&mut self, prefix: &str) -> Name {
        self.temp_count += 1;
        let name = Name::new(format!("{prefix}${}", self.temp_count));
        trace!(%name, "issued fresh name");
        name
    }

    /// Returns a fresh temporary name (`t$N`).
    pub fn fresh_temp(&mut self) -> Name {
        self.fresh_name(TEMP_PREFIX)
    }

    /// Returns how many names this session has issued.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.temp_count
    }
}
