//! Property-based tests for literal canonicalization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use typeterm_integers::{Integer, Natural};

    use crate::{parse_fixed_point, Canonicalizer, FixedPointLiteral, LiteralConfig};

    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    fn radix() -> impl Strategy<Value = u32> {
        2u32..=36u32
    }

    /// Digit strings valid in `radix`, possibly with leading zeros.
    fn digits_in(radix: u32) -> impl Strategy<Value = String> {
        proptest::collection::vec(0..radix as usize, 1..8)
            .prop_map(|ds| ds.into_iter().map(|d| DIGITS[d] as char).collect())
    }

    fn literal() -> impl Strategy<Value = (u32, String, String)> {
        radix().prop_flat_map(|r| (Just(r), digits_in(r), digits_in(r)))
    }

    fn wide() -> Canonicalizer {
        Canonicalizer::new(LiteralConfig { max_radix: 36 })
    }

    proptest! {
        // Padding with zeros never changes the quadruple.

        #[test]
        fn trailing_zeros_are_invisible((r, int, frac) in literal(), pad in 0usize..4) {
            let plain = format!("{int}.{frac}_{r}");
            let padded = format!("{int}.{frac}{}_{r}", "0".repeat(pad));
            prop_assert_eq!(wide().fixed_point(&plain), wide().fixed_point(&padded));
        }

        #[test]
        fn leading_zeros_are_invisible((r, int, frac) in literal(), pad in 0usize..4) {
            let plain = format!("{int}.{frac}_{r}");
            let padded = format!("{}{int}.{frac}_{r}", "0".repeat(pad));
            prop_assert_eq!(wide().fixed_point(&plain), wide().fixed_point(&padded));
        }

        // Decoding agrees with building the quadruple directly.

        #[test]
        fn decode_matches_from_parts((r, int, frac) in literal()) {
            let text = format!("{int}.{frac}_{r}");
            let expected = FixedPointLiteral::from_parts(
                Integer::from_str_radix(&int, r).unwrap(),
                Natural::from_str_radix(&frac, r).unwrap(),
                r,
                u32::try_from(frac.len()).unwrap(),
            )
            .unwrap();
            prop_assert_eq!(wide().fixed_point(&text).unwrap(), expected);
        }

        // The canonical form survives printing and re-reading.

        #[test]
        fn display_reparses((r, int, frac) in literal()) {
            let lit = wide().fixed_point(&format!("{int}.{frac}_{r}")).unwrap();
            prop_assert_eq!(wide().fixed_point(&lit.to_string()).unwrap(), lit);
        }

        // Decimal text and its radix-suffixed spelling agree.

        #[test]
        fn integral_radix_spellings_agree(value in any::<u64>(), r in radix()) {
            let spelled = format!("{}_{r}", Natural::new(value).to_string_radix(r));
            prop_assert_eq!(wide().fixed_point(&spelled), parse_fixed_point(&value.to_string()));
            prop_assert_eq!(wide().integer(&spelled).unwrap(), Integer::from(value));
        }

        // Values are preserved exactly.

        #[test]
        fn decimal_value_is_exact(int in 0u64..1_000_000, frac in 0u64..1_000_000) {
            let lit = parse_fixed_point(&format!("{int}.{frac:06}")).unwrap();
            let expected = typeterm_integers::Rational::new(
                Integer::from(int * 1_000_000 + frac),
                Natural::new(1_000_000),
            );
            prop_assert_eq!(lit.to_rational(), expected);
        }
    }
}
