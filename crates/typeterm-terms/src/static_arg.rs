//! Static arguments.
//!
//! Static arguments are the type-level values that appear inside `[\ \]`
//! brackets: types, natural-number expressions, booleans, operators, and
//! the dimension/unit algebra.

use std::fmt;
use std::sync::Arc;

use typeterm_core::{HashCell, Name, QualifiedName};
use typeterm_integers::Natural;
use typeterm_literals::FixedPointLiteral;

use crate::tag::ArgTag;
use crate::type_term::TypeTerm;

/// The shape of a static argument.
///
/// Binary forms keep their operands in written order. `m*s` and `s*m` are
/// distinct arguments.
#[derive(Clone, Debug, Hash)]
pub enum StaticArgKind {
    /// A type used as an argument.
    Type(TypeTerm),
    /// A natural-number literal.
    NatLiteral(Natural),
    /// A reference to a natural-number parameter.
    NatRef(QualifiedName),
    /// `left + right`.
    NatSum {
        /// Left operand.
        left: StaticArg,
        /// Right operand.
        right: StaticArg,
    },
    /// `left right` (natural-number product).
    NatProduct {
        /// Left operand.
        left: StaticArg,
        /// Right operand.
        right: StaticArg,
    },
    /// `numerator / denominator` (natural-number quotient).
    NatQuotient {
        /// Dividend.
        numerator: StaticArg,
        /// Divisor.
        denominator: StaticArg,
    },
    /// `true` or `false`.
    BoolLiteral(bool),
    /// A reference to a boolean parameter.
    BoolRef(QualifiedName),
    /// An operator passed as an argument.
    OprArg(Name),
    /// A reference to a unit.
    UnitRef(QualifiedName),
    /// A numeric scale factor in the units algebra.
    Number(FixedPointLiteral),
    /// A dimension expression used where a dimension is expected.
    DimRef(StaticArg),
    /// `multiplier multiplicand`.
    DimProduct {
        /// Left factor.
        multiplier: StaticArg,
        /// Right factor.
        multiplicand: StaticArg,
    },
    /// `numerator / denominator`.
    DimQuotient {
        /// Dividend.
        numerator: StaticArg,
        /// Divisor.
        denominator: StaticArg,
    },
    /// `base ^ power`.
    DimExponent {
        /// Exponent, a natural-number argument.
        power: StaticArg,
        /// Dimension being raised.
        base: StaticArg,
    },
}

pub(crate) struct ArgNode {
    pub(crate) kind: StaticArgKind,
    pub(crate) hash: HashCell,
}

/// An immutable static argument.
///
/// Like [`TypeTerm`], a `StaticArg` is a shared handle with structural
/// equality, ordering and a cached hash.
#[derive(Clone)]
pub struct StaticArg(Arc<ArgNode>);

impl StaticArg {
    /// Wraps a kind in a fresh node.
    #[must_use]
    pub fn new(kind: StaticArgKind) -> Self {
        Self(Arc::new(ArgNode {
            kind,
            hash: HashCell::new(),
        }))
    }

    /// Returns the shape of this argument.
    #[must_use]
    pub fn kind(&self) -> &StaticArgKind {
        &self.0.kind
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn tag(&self) -> ArgTag {
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

    /// A type argument.
    #[must_use]
    pub fn ty(term: TypeTerm) -> Self {
        Self::new(StaticArgKind::Type(term))
    }

    /// A natural-number literal.
    #[must_use]
    pub fn nat(value: impl Into<Natural>) -> Self {
        Self::new(StaticArgKind::NatLiteral(value.into()))
    }

    /// A reference to a natural-number parameter.
    #[must_use]
    pub fn nat_ref(name: impl Into<Name>) -> Self {
        Self::new(StaticArgKind::NatRef(QualifiedName::simple(name)))
    }

    /// `left + right`.
    #[must_use]
    pub fn nat_sum(left: StaticArg, right: StaticArg) -> Self {
        Self::new(StaticArgKind::NatSum { left, right })
    }

    /// `left right`.
    #[must_use]
    pub fn nat_product(left: StaticArg, right: StaticArg) -> Self {
        Self::new(StaticArgKind::NatProduct { left, right })
    }

    /// `numerator / denominator`.
    #[must_use]
    pub fn nat_quotient(numerator: StaticArg, denominator: StaticArg) -> Self {
        Self::new(StaticArgKind::NatQuotient {
            numerator,
            denominator,
        })
    }

    /// A boolean literal.
    #[must_use]
    pub fn bool(value: bool) -> Self {
        Self::new(StaticArgKind::BoolLiteral(value))
    }

    /// A reference to a boolean parameter.
    #[must_use]
    pub fn bool_ref(name: impl Into<Name>) -> Self {
        Self::new(StaticArgKind::BoolRef(QualifiedName::simple(name)))
    }

    /// An operator argument.
    #[must_use]
    pub fn opr(op: impl Into<Name>) -> Self {
        Self::new(StaticArgKind::OprArg(op.into()))
    }

    /// A reference to a unit.
    #[must_use]
    pub fn unit_ref(name: impl Into<Name>) -> Self {
        Self::new(StaticArgKind::UnitRef(QualifiedName::simple(name)))
    }

    /// A numeric scale factor.
    #[must_use]
    pub fn number(literal: FixedPointLiteral) -> Self {
        Self::new(StaticArgKind::Number(literal))
    }

    /// Wraps an argument as a dimension.
    #[must_use]
    pub fn dim_ref(inner: StaticArg) -> Self {
        Self::new(StaticArgKind::DimRef(inner))
    }

    /// `multiplier multiplicand`.
    #[must_use]
    pub fn dim_product(multiplier: StaticArg, multiplicand: StaticArg) -> Self {
        Self::new(StaticArgKind::DimProduct {
            multiplier,
            multiplicand,
        })
    }

    /// `numerator / denominator`.
    #[must_use]
    pub fn dim_quotient(numerator: StaticArg, denominator: StaticArg) -> Self {
        Self::new(StaticArgKind::DimQuotient {
            numerator,
            denominator,
        })
    }

    /// `base ^ power`.
    #[must_use]
    pub fn dim_exponent(base: StaticArg, power: StaticArg) -> Self {
        Self::new(StaticArgKind::DimExponent { power, base })
    }

    /// Returns the wrapped type, if this is a type argument.
    #[must_use]
    pub fn as_type(&self) -> Option<&TypeTerm> {
        match self.kind() {
            StaticArgKind::Type(term) => Some(term),
            _ => None,
        }
    }
}

impl From<TypeTerm> for StaticArg {
    fn from(term: TypeTerm) -> Self {
        Self::ty(term)
    }
}

impl From<StaticArgKind> for StaticArg {
    fn from(kind: StaticArgKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Debug for StaticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_exponent_stores_power_and_base() {
        let meter = StaticArg::unit_ref("meter");
        let two = StaticArg::nat(2u64);
        let squared = StaticArg::dim_exponent(meter.clone(), two.clone());
        let StaticArgKind::DimExponent { power, base } = squared.kind() else {
            panic!("expected an exponent");
        };
        assert!(StaticArg::ptr_eq(power, &two));
        assert!(StaticArg::ptr_eq(base, &meter));
    }

    #[test]
    fn test_as_type() {
        let z = TypeTerm::simple("ZZ32");
        assert!(StaticArg::ty(z.clone()).as_type().is_some());
        assert!(StaticArg::bool(true).as_type().is_none());
        assert_eq!(StaticArg::from(z).tag(), ArgTag::Type);
    }
}
