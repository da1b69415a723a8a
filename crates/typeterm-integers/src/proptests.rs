//! Property-based tests for the numeric wrappers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Natural, Rational};

    fn radix() -> impl Strategy<Value = u32> {
        2u32..=36u32
    }

    proptest! {
        // Parsing and printing agree in every radix.

        #[test]
        fn natural_radix_round_trip(value in any::<u64>(), radix in radix()) {
            let n = Natural::new(value);
            let text = n.to_string_radix(radix);
            prop_assert_eq!(Natural::from_str_radix(&text, radix).unwrap(), n);
        }

        #[test]
        fn integer_radix_round_trip(value in 0i64..i64::MAX, radix in radix()) {
            let n = Integer::new(value);
            let text = n.to_string_radix(radix);
            prop_assert_eq!(Integer::from_str_radix(&text, radix).unwrap(), n);
        }

        // Order, equality and hashing follow the numeric value.

        #[test]
        fn natural_order_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(Natural::new(a).cmp(&Natural::new(b)), a.cmp(&b));
        }

        #[test]
        fn integer_order_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Integer::new(a).cmp(&Integer::new(b)), a.cmp(&b));
        }

        #[test]
        fn rational_scaling_is_invisible(num in -1000i64..1000i64, den in 1u64..1000u64, k in 1u64..50u64) {
            let base = Rational::new(Integer::new(num), Natural::new(den));
            let scaled = Rational::new(
                Integer::new(num) * Integer::from(k),
                Natural::new(den) * Natural::new(k),
            );
            prop_assert_eq!(base, scaled);
        }
    }
}
