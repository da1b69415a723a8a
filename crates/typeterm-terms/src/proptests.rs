//! Property-based tests for the structural order.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;
    use proptest::strategy::LazyJust;

    use typeterm_core::{Name, QualifiedName};
    use typeterm_literals::parse_fixed_point;

    use crate::{
        sorted_unique, ExtentRange, Indices, KeywordType, StaticArg, StaticArgKind, StaticParam,
        TermTable, TypeKind, TypeTerm,
    };

    fn name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["A", "B", "ZZ32", "meter", "second"])
    }

    /// Dotted names of one to three segments, such as `A.ZZ32.meter`.
    fn qualified() -> impl Strategy<Value = QualifiedName> {
        vec(name(), 1..4).prop_map(|segments| {
            QualifiedName::new(segments.into_iter().map(Name::from)).unwrap()
        })
    }

    fn leaf_arg() -> impl Strategy<Value = StaticArg> {
        prop_oneof![
            (0u64..4).prop_map(StaticArg::nat),
            name().prop_map(StaticArg::nat_ref),
            any::<bool>().prop_map(StaticArg::bool),
            name().prop_map(StaticArg::bool_ref),
            name().prop_map(StaticArg::opr),
            name().prop_map(StaticArg::unit_ref),
            (0u64..20, 0u64..20).prop_map(|(int, frac)| {
                StaticArg::number(parse_fixed_point(&format!("{int}.{frac}")).unwrap())
            }),
        ]
    }

    fn extent() -> impl Strategy<Value = ExtentRange> {
        (option::of(leaf_arg()), option::of(leaf_arg()))
            .prop_map(|(base, size)| ExtentRange::new(base, size))
    }

    fn keyword(ty: BoxedStrategy<TypeTerm>) -> impl Strategy<Value = KeywordType> {
        (name(), ty).prop_map(|(n, t)| KeywordType::new(n, t))
    }

    fn type_term() -> BoxedStrategy<TypeTerm> {
        let leaf = prop_oneof![
            name().prop_map(TypeTerm::simple),
            qualified().prop_map(TypeTerm::named),
            LazyJust::new(TypeTerm::void),
        ];
        leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![
                inner.clone().prop_map(TypeTerm::set),
                inner.clone().prop_map(TypeTerm::list),
                inner.clone().prop_map(TypeTerm::rest),
                (inner.clone(), inner.clone()).prop_map(|(k, v)| TypeTerm::map(k, v)),
                (vec(inner.clone(), 0..3), vec(keyword(inner.clone()), 0..2))
                    .prop_map(|(es, ks)| TypeTerm::tuple_with_keywords(es, ks)),
                (
                    inner.clone(),
                    vec(inner.clone(), 0..3),
                    vec(keyword(inner.clone()), 0..2),
                    vec(inner.clone(), 0..2),
                )
                    .prop_map(|(range, domain, keywords, throws)| {
                        TypeTerm::new(TypeKind::Arrow {
                            range,
                            domain,
                            keywords,
                            throws,
                        })
                    }),
                (inner.clone(), vec(leaf_arg(), 0..3))
                    .prop_map(|(g, args)| TypeTerm::parameterized(g, args)),
                (inner.clone(), vec(extent(), 0..3))
                    .prop_map(|(e, xs)| TypeTerm::array(e, Indices::new(xs))),
                (inner.clone(), vec(extent(), 0..3)).prop_map(|(e, xs)| TypeTerm::matrix(e, xs)),
                (inner, leaf_arg()).prop_map(|(e, d)| TypeTerm::vector(e, d)),
            ]
        })
        .boxed()
    }

    fn static_arg() -> BoxedStrategy<StaticArg> {
        let leaf = prop_oneof![
            4 => leaf_arg(),
            1 => name().prop_map(|n| StaticArg::ty(TypeTerm::simple(n))),
        ];
        leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| StaticArg::nat_sum(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| StaticArg::nat_product(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| StaticArg::nat_quotient(l, r)),
                inner.clone().prop_map(StaticArg::dim_ref),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| StaticArg::dim_product(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| StaticArg::dim_quotient(l, r)),
                (inner, 0u64..4).prop_map(|(b, p)| StaticArg::dim_exponent(b, StaticArg::nat(p))),
                type_term().prop_map(StaticArg::ty),
            ]
        })
        .boxed()
    }

    fn static_param() -> impl Strategy<Value = StaticParam> {
        prop_oneof![
            (name(), any::<bool>(), option::of(vec(type_term(), 0..2))).prop_map(
                |(n, absorbs, extends)| StaticParam::Type {
                    name: n.into(),
                    absorbs,
                    extends,
                }
            ),
            name().prop_map(|n| StaticParam::Nat { name: n.into() }),
            name().prop_map(|n| StaticParam::Int { name: n.into() }),
            name().prop_map(|n| StaticParam::Bool { name: n.into() }),
            name().prop_map(|n| StaticParam::Dim { name: n.into() }),
            (name(), option::of(leaf_arg())).prop_map(|(n, dim)| StaticParam::Unit {
                name: n.into(),
                dim,
            }),
            name().prop_map(|n| StaticParam::Opr { name: n.into() }),
        ]
    }

    /// Rebuilds `term` node by node so that no allocation is shared.
    fn copy_type(term: &TypeTerm) -> TypeTerm {
        let copy_keywords = |ks: &[KeywordType]| -> Vec<KeywordType> {
            ks.iter()
                .map(|k| KeywordType::new(k.name.clone(), copy_type(&k.ty)))
                .collect()
        };
        let copy_types = |ts: &[TypeTerm]| -> Vec<TypeTerm> { ts.iter().map(copy_type).collect() };

        TypeTerm::new(match term.kind() {
            TypeKind::Named(n) => TypeKind::Named(n.clone()),
            TypeKind::Parameterized { generic, args } => TypeKind::Parameterized {
                generic: copy_type(generic),
                args: args.iter().map(copy_arg).collect(),
            },
            TypeKind::Tuple { elements, keywords } => TypeKind::Tuple {
                elements: copy_types(elements),
                keywords: copy_keywords(keywords),
            },
            TypeKind::Arrow {
                range,
                domain,
                keywords,
                throws,
            } => TypeKind::Arrow {
                range: copy_type(range),
                domain: copy_types(domain),
                keywords: copy_keywords(keywords),
                throws: copy_types(throws),
            },
            TypeKind::ArrayIndexed { element, indices } => TypeKind::ArrayIndexed {
                element: copy_type(element),
                indices: Indices::new(indices.extents.iter().map(copy_extent)),
            },
            TypeKind::Matrix {
                element,
                dimensions,
            } => TypeKind::Matrix {
                element: copy_type(element),
                dimensions: dimensions.iter().map(copy_extent).collect(),
            },
            TypeKind::Vector { element, dim } => TypeKind::Vector {
                element: copy_type(element),
                dim: copy_arg(dim),
            },
            TypeKind::Set { element } => TypeKind::Set {
                element: copy_type(element),
            },
            TypeKind::List { element } => TypeKind::List {
                element: copy_type(element),
            },
            TypeKind::Map { key, value } => TypeKind::Map {
                key: copy_type(key),
                value: copy_type(value),
            },
            TypeKind::Rest { element } => TypeKind::Rest {
                element: copy_type(element),
            },
            TypeKind::Void => TypeKind::Void,
        })
    }

    fn copy_extent(extent: &ExtentRange) -> ExtentRange {
        ExtentRange::new(
            extent.base.as_ref().map(copy_arg),
            extent.size.as_ref().map(copy_arg),
        )
    }

    /// Rebuilds `arg` node by node so that no allocation is shared.
    fn copy_arg(arg: &StaticArg) -> StaticArg {
        StaticArg::new(match arg.kind() {
            StaticArgKind::Type(t) => StaticArgKind::Type(copy_type(t)),
            StaticArgKind::NatLiteral(n) => StaticArgKind::NatLiteral(n.clone()),
            StaticArgKind::NatRef(n) => StaticArgKind::NatRef(n.clone()),
            StaticArgKind::NatSum { left, right } => StaticArgKind::NatSum {
                left: copy_arg(left),
                right: copy_arg(right),
            },
            StaticArgKind::NatProduct { left, right } => StaticArgKind::NatProduct {
                left: copy_arg(left),
                right: copy_arg(right),
            },
            StaticArgKind::NatQuotient {
                numerator,
                denominator,
            } => StaticArgKind::NatQuotient {
                numerator: copy_arg(numerator),
                denominator: copy_arg(denominator),
            },
            StaticArgKind::BoolLiteral(b) => StaticArgKind::BoolLiteral(*b),
            StaticArgKind::BoolRef(n) => StaticArgKind::BoolRef(n.clone()),
            StaticArgKind::OprArg(n) => StaticArgKind::OprArg(n.clone()),
            StaticArgKind::UnitRef(n) => StaticArgKind::UnitRef(n.clone()),
            StaticArgKind::Number(lit) => StaticArgKind::Number(lit.clone()),
            StaticArgKind::DimRef(inner) => StaticArgKind::DimRef(copy_arg(inner)),
            StaticArgKind::DimProduct {
                multiplier,
                multiplicand,
            } => StaticArgKind::DimProduct {
                multiplier: copy_arg(multiplier),
                multiplicand: copy_arg(multiplicand),
            },
            StaticArgKind::DimQuotient {
                numerator,
                denominator,
            } => StaticArgKind::DimQuotient {
                numerator: copy_arg(numerator),
                denominator: copy_arg(denominator),
            },
            StaticArgKind::DimExponent { power, base } => StaticArgKind::DimExponent {
                power: copy_arg(power),
                base: copy_arg(base),
            },
        })
    }

    proptest! {
        // Order laws.

        #[test]
        fn type_order_is_antisymmetric(a in type_term(), b in type_term()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn type_order_is_transitive(a in type_term(), b in type_term(), c in type_term()) {
            let mut sorted = vec![a, b, c];
            sorted.sort();
            prop_assert!(sorted[0] <= sorted[1]);
            prop_assert!(sorted[1] <= sorted[2]);
            prop_assert!(sorted[0] <= sorted[2]);
        }

        #[test]
        fn arg_order_is_antisymmetric(a in static_arg(), b in static_arg()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn arg_order_is_transitive(a in static_arg(), b in static_arg(), c in static_arg()) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a >= b && b >= c {
                prop_assert!(a >= c);
            }
        }

        #[test]
        fn param_order_is_antisymmetric(a in static_param(), b in static_param()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        }

        #[test]
        fn named_order_follows_segments(a in qualified(), b in qualified()) {
            let (ta, tb) = (TypeTerm::named(a.clone()), TypeTerm::named(b.clone()));
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
            prop_assert_eq!(ta.to_string(), a.to_string());
        }

        // Different variants order by tag alone.

        #[test]
        fn tags_decide_across_variants(a in type_term(), b in type_term()) {
            if a.tag() != b.tag() {
                prop_assert_eq!(a.cmp(&b), a.tag().cmp(&b.tag()));
            }
        }

        #[test]
        fn param_tags_decide_across_variants(a in static_param(), b in static_param()) {
            if a.tag() != b.tag() {
                prop_assert_eq!(a.cmp(&b), a.tag().cmp(&b.tag()));
            }
        }

        #[test]
        fn arg_tags_decide_across_variants(a in static_arg(), b in static_arg()) {
            if a.tag() != b.tag() {
                prop_assert_eq!(a.cmp(&b), a.tag().cmp(&b.tag()));
            }
        }

        // Equality, order and hashing agree.

        #[test]
        fn type_eq_matches_order_and_hash(a in type_term(), b in type_term()) {
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
            if a == b {
                prop_assert_eq!(a.structural_hash(), b.structural_hash());
            }
        }

        #[test]
        fn arg_eq_matches_order_and_hash(a in static_arg(), b in static_arg()) {
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
            if a == b {
                prop_assert_eq!(a.structural_hash(), b.structural_hash());
            }
        }

        #[test]
        fn rebuilt_type_is_equal(a in type_term()) {
            let b = copy_type(&a);
            prop_assert_eq!(a.cmp(&b), Ordering::Equal);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.structural_hash(), b.structural_hash());
        }

        #[test]
        fn rebuilt_arg_is_equal(a in static_arg()) {
            let b = copy_arg(&a);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.structural_hash(), b.structural_hash());
        }

        // Equality still holds once hashes are cached on one side only.

        #[test]
        fn partially_cached_terms_stay_equal(a in type_term()) {
            let b = copy_type(&a);
            let _ = a.structural_hash();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&b, &a);
        }

        // Tables and deduplication.

        #[test]
        fn table_keys_rebuilt_terms_alike(terms in vec(type_term(), 1..8)) {
            let mut table = TermTable::new();
            let ids: Vec<_> = terms.iter().cloned().map(|t| table.intern(t)).collect();
            for (term, id) in terms.iter().zip(&ids) {
                prop_assert_eq!(table.intern(copy_type(term)), *id);
            }
            prop_assert_eq!(table.len(), sorted_unique(terms).len());
        }

        #[test]
        fn sorted_unique_ignores_input_order(mut terms in vec(static_arg(), 0..8)) {
            let forward = sorted_unique(terms.clone());
            terms.reverse();
            prop_assert_eq!(sorted_unique(terms), forward.clone());
            prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
