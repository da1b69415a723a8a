//! Type terms.
//!
//! A [`TypeTerm`] is an immutable, reference-counted tree. Cloning a term
//! bumps a counter; children are shared between every term built from them.
//! Each node carries its own hash cache so that a term used as a map key is
//! hashed at most once.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use typeterm_core::{HashCell, Name, QualifiedName};

use crate::extent::{ExtentRange, Indices};
use crate::static_arg::StaticArg;
use crate::tag::TypeTag;

/// The shape of a type term.
#[derive(Clone, Debug, Hash)]
pub enum TypeKind {
    /// An ordinary named type such as `ZZ32` or `Fortress.Core.Object`.
    Named(QualifiedName),
    /// A generic type applied to static arguments, `List[\ZZ32\]`.
    Parameterized {
        /// The generic being instantiated.
        generic: TypeTerm,
        /// Arguments in written order.
        args: Vec<StaticArg>,
    },
    /// A tuple type with optional keyword fields.
    Tuple {
        /// Positional element types.
        elements: Vec<TypeTerm>,
        /// Keyword fields, in written order.
        keywords: Vec<KeywordType>,
    },
    /// A function type.
    Arrow {
        /// Result type.
        range: TypeTerm,
        /// Positional parameter types.
        domain: Vec<TypeTerm>,
        /// Keyword parameters.
        keywords: Vec<KeywordType>,
        /// Declared exception types.
        throws: Vec<TypeTerm>,
    },
    /// An array type with explicit index extents.
    ArrayIndexed {
        /// Element type.
        element: TypeTerm,
        /// One extent per array dimension.
        indices: Indices,
    },
    /// A matrix type.
    Matrix {
        /// Element type.
        element: TypeTerm,
        /// Extents, outermost first.
        dimensions: Vec<ExtentRange>,
    },
    /// A vector type whose length is a static argument.
    Vector {
        /// Element type.
        element: TypeTerm,
        /// Length.
        dim: StaticArg,
    },
    /// A set type.
    Set {
        /// Element type.
        element: TypeTerm,
    },
    /// A list type.
    List {
        /// Element type.
        element: TypeTerm,
    },
    /// A map type.
    Map {
        /// Key type.
        key: TypeTerm,
        /// Value type.
        value: TypeTerm,
    },
    /// A varargs tail, `T...`.
    Rest {
        /// Element type.
        element: TypeTerm,
    },
    /// The unit type `()`.
    Void,
}

/// A named field of a tuple or arrow type.
///
/// Ordered by name, then type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeywordType {
    /// Field name.
    pub name: Name,
    /// Field type.
    pub ty: TypeTerm,
}

impl KeywordType {
    /// Creates a keyword field.
    #[must_use]
    pub fn new(name: impl Into<Name>, ty: TypeTerm) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

pub(crate) struct TypeNode {
    pub(crate) kind: TypeKind,
    pub(crate) hash: HashCell,
}

/// An immutable type term.
///
/// `TypeTerm` is a handle: clones share the same node. Equality, ordering
/// and hashing are structural, so two independently built copies of the same
/// term are equal and hash alike.
#[derive(Clone)]
pub struct TypeTerm(Arc<TypeNode>);

impl TypeTerm {
    /// Wraps a kind in a fresh node.
    #[must_use]
    pub fn new(kind: TypeKind) -> Self {
        Self(Arc::new(TypeNode {
            kind,
            hash: HashCell::new(),
        }))
    }

    /// Returns the shape of this term.
    #[must_use]
    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.0.kind.tag()
    }

    /// Returns `true` if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub(crate) fn hash_cell(&self) -> &HashCell {
        &self.0.hash
    }

    /// A named type.
    #[must_use]
    pub fn named(name: QualifiedName) -> Self {
        Self::new(TypeKind::Named(name))
    }

    /// A named type with a single-segment name.
    #[must_use]
    pub fn simple(name: impl Into<Name>) -> Self {
        Self::named(QualifiedName::simple(name))
    }

    /// A generic type applied to `args`.
    #[must_use]
    pub fn parameterized(generic: TypeTerm, args: impl IntoIterator<Item = StaticArg>) -> Self {
        Self::new(TypeKind::Parameterized {
            generic,
            args: args.into_iter().collect(),
        })
    }

    /// A tuple type without keyword fields.
    #[must_use]
    pub fn tuple(elements: impl IntoIterator<Item = TypeTerm>) -> Self {
        Self::tuple_with_keywords(elements, [])
    }

    /// A tuple type with keyword fields.
    #[must_use]
    pub fn tuple_with_keywords(
        elements: impl IntoIterator<Item = TypeTerm>,
        keywords: impl IntoIterator<Item = KeywordType>,
    ) -> Self {
        Self::new(TypeKind::Tuple {
            elements: elements.into_iter().collect(),
            keywords: keywords.into_iter().collect(),
        })
    }

    /// A function type with positional parameters only and no `throws` clause.
    #[must_use]
    pub fn arrow(domain: impl IntoIterator<Item = TypeTerm>, range: TypeTerm) -> Self {
        Self::new(TypeKind::Arrow {
            range,
            domain: domain.into_iter().collect(),
            keywords: Vec::new(),
            throws: Vec::new(),
        })
    }

    /// An array type.
    #[must_use]
    pub fn array(element: TypeTerm, indices: Indices) -> Self {
        Self::new(TypeKind::ArrayIndexed { element, indices })
    }

    /// A matrix type.
    #[must_use]
    pub fn matrix(element: TypeTerm, dimensions: impl IntoIterator<Item = ExtentRange>) -> Self {
        Self::new(TypeKind::Matrix {
            element,
            dimensions: dimensions.into_iter().collect(),
        })
    }

    /// A vector type of length `dim`.
    #[must_use]
    pub fn vector(element: TypeTerm, dim: StaticArg) -> Self {
        Self::new(TypeKind::Vector { element, dim })
    }

    /// A set type.
    #[must_use]
    pub fn set(element: TypeTerm) -> Self {
        Self::new(TypeKind::Set { element })
    }

    /// A list type.
    #[must_use]
    pub fn list(element: TypeTerm) -> Self {
        Self::new(TypeKind::List { element })
    }

    /// A map type.
    #[must_use]
    pub fn map(key: TypeTerm, value: TypeTerm) -> Self {
        Self::new(TypeKind::Map { key, value })
    }

    /// A varargs tail.
    #[must_use]
    pub fn rest(element: TypeTerm) -> Self {
        Self::new(TypeKind::Rest { element })
    }

    /// The unit type.
    #[must_use]
    pub fn void() -> Self {
        Self::new(TypeKind::Void)
    }

    /// Returns the direct type children of this term, in field order.
    ///
    /// Static arguments and extents are not descended into.
    #[must_use]
    pub fn type_children(&self) -> SmallVec<[&TypeTerm; 4]> {
        let mut out = SmallVec::new();
        match self.kind() {
            TypeKind::Named(_) | TypeKind::Void => {}
            TypeKind::Parameterized { generic, .. } => out.push(generic),
            TypeKind::Tuple { elements, keywords } => {
                out.extend(elements);
                out.extend(keywords.iter().map(|kw| &kw.ty));
            }
            TypeKind::Arrow {
                range,
                domain,
                keywords,
                throws,
            } => {
                out.push(range);
                out.extend(domain);
                out.extend(keywords.iter().map(|kw| &kw.ty));
                out.extend(throws);
            }
            TypeKind::ArrayIndexed { element, .. }
            | TypeKind::Matrix { element, .. }
            | TypeKind::Vector { element, .. }
            | TypeKind::Set { element }
            | TypeKind::List { element }
            | TypeKind::Rest { element } => out.push(element),
            TypeKind::Map { key, value } => {
                out.push(key);
                out.push(value);
            }
        }
        out
    }
}

impl From<TypeKind> for TypeTerm {
    fn from(kind: TypeKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Debug for TypeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.kind, f)
    }
}
