//! Array and matrix extents.

use crate::static_arg::StaticArg;

/// One dimension of an array or matrix: an optional lower bound and an
/// optional size, written `base#size`.
///
/// Ordered by base, then size, with an absent bound first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtentRange {
    /// Lower bound, if written.
    pub base: Option<StaticArg>,
    /// Number of elements, if written.
    pub size: Option<StaticArg>,
}

impl ExtentRange {
    /// Creates an extent.
    #[must_use]
    pub fn new(base: Option<StaticArg>, size: Option<StaticArg>) -> Self {
        Self { base, size }
    }

    /// An extent with only a size.
    #[must_use]
    pub fn sized(size: StaticArg) -> Self {
        Self::new(None, Some(size))
    }
}

/// The extents of an array type, one per dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Indices {
    /// Extents, outermost first.
    pub extents: Vec<ExtentRange>,
}

impl Indices {
    /// Creates an index list.
    #[must_use]
    pub fn new(extents: impl IntoIterator<Item = ExtentRange>) -> Self {
        Self {
            extents: extents.into_iter().collect(),
        }
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.extents.len()
    }
}
