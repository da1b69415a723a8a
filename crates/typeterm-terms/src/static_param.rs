//! Declared static parameters.

use typeterm_core::Name;

use crate::static_arg::StaticArg;
use crate::type_term::TypeTerm;

/// A static parameter as written in a declaration header.
///
/// Parameters of different kinds order by kind. Within a kind they order by
/// name, with type and unit parameters breaking ties on their extra fields
/// in declaration order. Variant order matches [`ParamTag`](crate::ParamTag).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaticParam {
    /// A type parameter.
    Type {
        /// Parameter name.
        name: Name,
        /// Whether the parameter carries `absorbs unit`.
        absorbs: bool,
        /// Upper bounds, if an `extends` clause was written.
        extends: Option<Vec<TypeTerm>>,
    },
    /// `nat n`.
    Nat {
        /// Parameter name.
        name: Name,
    },
    /// `int i`.
    Int {
        /// Parameter name.
        name: Name,
    },
    /// `bool b`.
    Bool {
        /// Parameter name.
        name: Name,
    },
    /// `dim D`.
    Dim {
        /// Parameter name.
        name: Name,
    },
    /// `unit U` with an optional dimension.
    Unit {
        /// Parameter name.
        name: Name,
        /// Dimension the unit belongs to.
        dim: Option<StaticArg>,
    },
    /// `opr OP`.
    Opr {
        /// Parameter name.
        name: Name,
    },
}

impl StaticParam {
    /// A type parameter without bounds.
    #[must_use]
    pub fn ty(name: impl Into<Name>) -> Self {
        StaticParam::Type {
            name: name.into(),
            absorbs: false,
            extends: None,
        }
    }

    /// A type parameter with an `extends` clause.
    #[must_use]
    pub fn ty_extends(name: impl Into<Name>, bounds: impl IntoIterator<Item = TypeTerm>) -> Self {
        StaticParam::Type {
            name: name.into(),
            absorbs: false,
            extends: Some(bounds.into_iter().collect()),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            StaticParam::Type { name, .. }
            | StaticParam::Nat { name }
            | StaticParam::Int { name }
            | StaticParam::Bool { name }
            | StaticParam::Dim { name }
            | StaticParam::Unit { name, .. }
            | StaticParam::Opr { name } => name,
        }
    }
}
