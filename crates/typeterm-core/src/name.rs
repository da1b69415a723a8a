//! Identifiers and dotted names.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::compare::compare_sequence;
use crate::error::NameError;

/// A single identifier segment.
///
/// Names are reference counted so that cloning a term never copies text.
/// They order by their text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    /// Creates a name from its text.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// Returns the text of the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dotted name such as `Fortress.Core.Object`.
///
/// Invariant: at least one segment.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: SmallVec<[Name; 2]>,
}

impl QualifiedName {
    /// Creates a qualified name from its segments.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Empty` if `segments` yields nothing.
    pub fn new(segments: impl IntoIterator<Item = Name>) -> Result<Self, NameError> {
        let segments: SmallVec<[Name; 2]> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self { segments })
    }

    /// Creates a single-segment name.
    #[must_use]
    pub fn simple(name: impl Into<Name>) -> Self {
        Self {
            segments: smallvec::smallvec![name.into()],
        }
    }

    /// Splits dotted text into a qualified name.
    ///
    /// # Errors
    ///
    /// Returns an error if `dotted` is empty or has an empty segment.
    pub fn parse(dotted: &str) -> Result<Self, NameError> {
        if dotted.is_empty() {
            return Err(NameError::Empty);
        }
        let segments = dotted
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(NameError::EmptySegment(dotted.to_string()))
                } else {
                    Ok(Name::new(segment))
                }
            })
            .collect::<Result<SmallVec<[Name; 2]>, _>>()?;
        Ok(Self { segments })
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// Returns the last segment.
    #[must_use]
    pub fn last(&self) -> &Name {
        // Non-empty by construction.
        &self.segments[self.segments.len() - 1]
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_sequence(&self.segments, &other.segments, Name::cmp)
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({self})")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}
