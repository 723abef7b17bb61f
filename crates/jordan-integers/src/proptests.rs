//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use dashu::base::{Gcd, UnsignedAbs};
    use dashu::integer::UBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_literal_roundtrip(a in any::<i64>()) {
            let parsed = Integer::parse_literal(&a.to_string()).unwrap();
            prop_assert_eq!(parsed.to_i64(), Some(a));
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_division_undoes_multiplication(
            a in rational(),
            num in non_zero_int(),
            den in non_zero_int(),
        ) {
            let b = Rational::from_i64(num, den);
            prop_assert_eq!(&(&a * &b) / &b, a);
        }

        #[test]
        fn rational_lowest_terms(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let (n, d) = r.parts();
            prop_assert_eq!(d.signum(), 1);
            let (n, d) = (n.into_inner().unsigned_abs(), d.into_inner().unsigned_abs());
            prop_assert_eq!(n.gcd(d), UBig::ONE);
            // Scaling numerator and denominator never changes the value.
            prop_assert_eq!(Rational::from_i64(num * 7, den * 7), r);
        }

        #[test]
        fn rational_display_parse_idempotent(r in rational()) {
            let shown = r.to_string();
            let reparsed: Rational = shown.parse().unwrap();
            prop_assert_eq!(reparsed.to_string(), shown);
            prop_assert_eq!(reparsed, r);
        }

        #[test]
        fn rational_abs_non_negative(r in rational()) {
            prop_assert!(r.abs().signum() >= 0);
            prop_assert_eq!(r.abs(), (-r).abs());
        }
    }
}
