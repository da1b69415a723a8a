//! Property-based tests for the ordering combinators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{compare_optional, compare_sequence, QualifiedName};

    fn short_seq() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(0u8..4, 0..5)
    }

    fn dotted() -> impl Strategy<Value = String> {
        proptest::collection::vec("[ab]{1,2}", 1..4).prop_map(|s| s.join("."))
    }

    proptest! {
        // compare_sequence is a lexicographic order consistent with slice equality.

        #[test]
        fn sequence_matches_slice_order(xs in short_seq(), ys in short_seq()) {
            prop_assert_eq!(compare_sequence(&xs, &ys, u8::cmp), xs.as_slice().cmp(ys.as_slice()));
        }

        #[test]
        fn sequence_equal_iff_equal(xs in short_seq(), ys in short_seq()) {
            let equal = compare_sequence(&xs, &ys, u8::cmp) == Ordering::Equal;
            prop_assert_eq!(equal, xs == ys);
        }

        #[test]
        fn sequence_antisymmetric(xs in short_seq(), ys in short_seq()) {
            prop_assert_eq!(
                compare_sequence(&xs, &ys, u8::cmp),
                compare_sequence(&ys, &xs, u8::cmp).reverse()
            );
        }

        #[test]
        fn optional_matches_option_order(a in proptest::option::of(0u8..4), b in proptest::option::of(0u8..4)) {
            prop_assert_eq!(compare_optional(a.as_ref(), b.as_ref(), u8::cmp), a.cmp(&b));
        }

        // Qualified names order consistently with their equality.

        #[test]
        fn qualified_name_order_consistent(a in dotted(), b in dotted()) {
            let a = QualifiedName::parse(&a).unwrap();
            let b = QualifiedName::parse(&b).unwrap();
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}
