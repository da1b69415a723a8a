//! Errors raised while building names.

use thiserror::Error;

/// A name could not be built from the given segments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameError {
    /// A qualified name needs at least one segment.
    #[error("qualified name has no segments")]
    Empty,

    /// A segment of a dotted name was empty, as in `a..b`.
    #[error("qualified name `{0}` has an empty segment")]
    EmptySegment(String),
}
