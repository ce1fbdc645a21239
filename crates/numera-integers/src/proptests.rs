//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{ArithmeticError, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn normalization_is_scale_invariant(n in non_zero_int(), d in non_zero_int(), k in non_zero_int()) {
            let scaled = Rational::from_i64(k * n, k * d).unwrap();
            prop_assert_eq!(scaled, Rational::from_i64(n, d).unwrap());
        }

        #[test]
        fn denominator_is_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(r.denominator().is_positive());
        }

        #[test]
        fn stored_form_is_reduced(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn zero_denominator_is_rejected(n in small_int()) {
            prop_assert_eq!(Rational::from_i64(n, 0), Err(ArithmeticError::DivisionByZero));
        }

        // Field identities

        #[test]
        fn square_of_sum_expands(a in rational(), b in rational()) {
            let sum = &a + &b;
            let ab = &a * &b;
            let expanded = &(&(&a * &a) + &ab) + &(&ab + &(&b * &b));
            prop_assert_eq!(&sum * &sum, expanded);
        }

        #[test]
        fn difference_of_squares_factors(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a * &a) - &(&b * &b), &(&a - &b) * &(&a + &b));
        }

        #[test]
        fn division_inverts_multiplication(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((&a * &b).checked_div(&b), Ok(a));
        }

        #[test]
        fn multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d).unwrap();
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_integer() && product.numerator().is_one());
        }

        // Total order

        #[test]
        fn compare_is_antisymmetric(a in rational(), b in rational()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn compare_is_transitive(a in rational(), b in rational(), c in rational()) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }

        #[test]
        fn compare_matches_real_order(n1 in small_int(), d1 in non_zero_int(), n2 in small_int(), d2 in non_zero_int()) {
            let a = Rational::from_i64(n1, d1).unwrap();
            let b = Rational::from_i64(n2, d2).unwrap();
            // n1/d1 < n2/d2 over the reals, cleared of signed denominators
            let left = i128::from(n1) * i128::from(d2) * i128::from(d1.signum() * d2.signum());
            let right = i128::from(n2) * i128::from(d1) * i128::from(d1.signum() * d2.signum());
            prop_assert_eq!(a.cmp(&b), left.cmp(&right));
        }

        #[test]
        fn equality_agrees_with_compare(a in rational(), b in rational()) {
            prop_assert_eq!(a == b, a.cmp(&b).is_eq());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            use num_traits::Zero;
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }
    }
}
