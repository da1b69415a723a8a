//! The structural order.
//!
//! Every root type gets a total order:
//!
//! 1. Two handles to the same node are `Equal`.
//! 2. Different variants order by [`tag`](crate::tag) alone.
//! 3. Same variant compares fields in declaration order, stopping at the
//!    first difference.
//!
//! Binary forms are compared operand by operand, so `m*s` and `s*m` are
//! different. A `DimExponent` compares its power before its base.
//!
//! [`StaticParam`](crate::StaticParam), [`KeywordType`], [`ExtentRange`] and
//! [`Indices`](crate::Indices) hold no cached hash and are not shared, so
//! they derive `Ord` together with `Eq` and `Hash`. The derived order is the
//! same rule: variant first, then fields in declaration order, absent before
//! present.

use std::cmp::Ordering;

use typeterm_core::{compare_flag, compare_sequence};

use crate::extent::ExtentRange;
use crate::static_arg::{StaticArg, StaticArgKind};
use crate::type_term::{KeywordType, TypeKind, TypeTerm};

/// Binds the fields of `$other`, which is known to share the variant of the
/// arm being matched.
macro_rules! same_variant {
    ($other:expr, $pat:pat) => {
        let $pat = $other else {
            unreachable!("equal tags on different variants")
        };
    };
}

fn compare_types(a: &TypeTerm, b: &TypeTerm) -> Ordering {
    if TypeTerm::ptr_eq(a, b) {
        return Ordering::Equal;
    }
    let by_tag = a.tag().cmp(&b.tag());
    if by_tag != Ordering::Equal {
        return by_tag;
    }

    match a.kind() {
        TypeKind::Named(lhs) => {
            same_variant!(b.kind(), TypeKind::Named(rhs));
            lhs.cmp(rhs)
        }
        TypeKind::Parameterized { generic, args } => {
            same_variant!(
                b.kind(),
                TypeKind::Parameterized {
                    generic: rhs_generic,
                    args: rhs_args,
                }
            );
            generic
                .cmp(rhs_generic)
                .then_with(|| compare_sequence(args, rhs_args, StaticArg::cmp))
        }
        TypeKind::Tuple { elements, keywords } => {
            same_variant!(
                b.kind(),
                TypeKind::Tuple {
                    elements: rhs_elements,
                    keywords: rhs_keywords,
                }
            );
            compare_sequence(elements, rhs_elements, TypeTerm::cmp)
                .then_with(|| compare_sequence(keywords, rhs_keywords, KeywordType::cmp))
        }
        TypeKind::Arrow {
            range,
            domain,
            keywords,
            throws,
        } => {
            same_variant!(
                b.kind(),
                TypeKind::Arrow {
                    range: rhs_range,
                    domain: rhs_domain,
                    keywords: rhs_keywords,
                    throws: rhs_throws,
                }
            );
            range
                .cmp(rhs_range)
                .then_with(|| compare_sequence(domain, rhs_domain, TypeTerm::cmp))
                .then_with(|| compare_sequence(keywords, rhs_keywords, KeywordType::cmp))
                .then_with(|| compare_sequence(throws, rhs_throws, TypeTerm::cmp))
        }
        TypeKind::ArrayIndexed { element, indices } => {
            same_variant!(
                b.kind(),
                TypeKind::ArrayIndexed {
                    element: rhs_element,
                    indices: rhs_indices,
                }
            );
            element
                .cmp(rhs_element)
                .then_with(|| indices.cmp(rhs_indices))
        }
        TypeKind::Matrix {
            element,
            dimensions,
        } => {
            same_variant!(
                b.kind(),
                TypeKind::Matrix {
                    element: rhs_element,
                    dimensions: rhs_dimensions,
                }
            );
            element
                .cmp(rhs_element)
                .then_with(|| compare_sequence(dimensions, rhs_dimensions, ExtentRange::cmp))
        }
        TypeKind::Vector { element, dim } => {
            same_variant!(
                b.kind(),
                TypeKind::Vector {
                    element: rhs_element,
                    dim: rhs_dim,
                }
            );
            element.cmp(rhs_element).then_with(|| dim.cmp(rhs_dim))
        }
        TypeKind::Set { element } => {
            same_variant!(b.kind(), TypeKind::Set { element: rhs });
            element.cmp(rhs)
        }
        TypeKind::List { element } => {
            same_variant!(b.kind(), TypeKind::List { element: rhs });
            element.cmp(rhs)
        }
        TypeKind::Map { key, value } => {
            same_variant!(
                b.kind(),
                TypeKind::Map {
                    key: rhs_key,
                    value: rhs_value,
                }
            );
            key.cmp(rhs_key).then_with(|| value.cmp(rhs_value))
        }
        TypeKind::Rest { element } => {
            same_variant!(b.kind(), TypeKind::Rest { element: rhs });
            element.cmp(rhs)
        }
        TypeKind::Void => Ordering::Equal,
    }
}

fn compare_args(a: &StaticArg, b: &StaticArg) -> Ordering {
    if StaticArg::ptr_eq(a, b) {
        return Ordering::Equal;
    }
    let by_tag = a.tag().cmp(&b.tag());
    if by_tag != Ordering::Equal {
        return by_tag;
    }

    match a.kind() {
        StaticArgKind::Type(lhs) => {
            same_variant!(b.kind(), StaticArgKind::Type(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::NatLiteral(lhs) => {
            same_variant!(b.kind(), StaticArgKind::NatLiteral(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::NatRef(lhs) => {
            same_variant!(b.kind(), StaticArgKind::NatRef(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::NatSum { left, right } => {
            same_variant!(
                b.kind(),
                StaticArgKind::NatSum {
                    left: rhs_left,
                    right: rhs_right,
                }
            );
            left.cmp(rhs_left).then_with(|| right.cmp(rhs_right))
        }
        StaticArgKind::NatProduct { left, right } => {
            same_variant!(
                b.kind(),
                StaticArgKind::NatProduct {
                    left: rhs_left,
                    right: rhs_right,
                }
            );
            left.cmp(rhs_left).then_with(|| right.cmp(rhs_right))
        }
        StaticArgKind::NatQuotient {
            numerator,
            denominator,
        } => {
            same_variant!(
                b.kind(),
                StaticArgKind::NatQuotient {
                    numerator: rhs_numerator,
                    denominator: rhs_denominator,
                }
            );
            numerator
                .cmp(rhs_numerator)
                .then_with(|| denominator.cmp(rhs_denominator))
        }
        StaticArgKind::BoolLiteral(lhs) => {
            same_variant!(b.kind(), StaticArgKind::BoolLiteral(rhs));
            compare_flag(*lhs, *rhs)
        }
        StaticArgKind::BoolRef(lhs) => {
            same_variant!(b.kind(), StaticArgKind::BoolRef(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::OprArg(lhs) => {
            same_variant!(b.kind(), StaticArgKind::OprArg(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::UnitRef(lhs) => {
            same_variant!(b.kind(), StaticArgKind::UnitRef(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::Number(lhs) => {
            same_variant!(b.kind(), StaticArgKind::Number(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::DimRef(lhs) => {
            same_variant!(b.kind(), StaticArgKind::DimRef(rhs));
            lhs.cmp(rhs)
        }
        StaticArgKind::DimProduct {
            multiplier,
            multiplicand,
        } => {
            same_variant!(
                b.kind(),
                StaticArgKind::DimProduct {
                    multiplier: rhs_multiplier,
                    multiplicand: rhs_multiplicand,
                }
            );
            multiplier
                .cmp(rhs_multiplier)
                .then_with(|| multiplicand.cmp(rhs_multiplicand))
        }
        StaticArgKind::DimQuotient {
            numerator,
            denominator,
        } => {
            same_variant!(
                b.kind(),
                StaticArgKind::DimQuotient {
                    numerator: rhs_numerator,
                    denominator: rhs_denominator,
                }
            );
            numerator
                .cmp(rhs_numerator)
                .then_with(|| denominator.cmp(rhs_denominator))
        }
        StaticArgKind::DimExponent { power, base } => {
            same_variant!(
                b.kind(),
                StaticArgKind::DimExponent {
                    power: rhs_power,
                    base: rhs_base,
                }
            );
            power.cmp(rhs_power).then_with(|| base.cmp(rhs_base))
        }
    }
}

impl Ord for TypeTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_types(self, other)
    }
}

impl PartialOrd for TypeTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StaticArg {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_args(self, other)
    }
}

impl PartialOrd for StaticArg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
