//! Property-based tests for the identity checks under floating-point rounding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use numera_rings::{Complex, Rational};

    use crate::{difference_of_squares, Verifier};

    fn component() -> impl Strategy<Value = f64> {
        prop_oneof![-1.0f64..1.0, -1e3f64..1e3, -1e9f64..1e9]
    }

    fn wide_complex() -> impl Strategy<Value = Complex> {
        (component(), component()).prop_map(|(re, im)| Complex::new(re, im))
    }

    proptest! {
        #[test]
        fn square_of_sum_passes_for_complex(a in wide_complex(), b in wide_complex()) {
            prop_assert!(Verifier::default().check_square_of_sum(&a, &b).is_ok());
        }

        #[test]
        fn difference_of_squares_passes_for_complex(a in wide_complex(), b in wide_complex()) {
            prop_assume!(difference_of_squares(&a, &b).quotient.is_ok());
            prop_assert!(Verifier::default().check_difference_of_squares(&a, &b).is_ok());
        }

        #[test]
        fn nearby_large_operands_pass(base in 1e6f64..1e9, offset in -1.0f64..1.0, im in -10.0f64..10.0) {
            let a = Complex::new(base + offset, im);
            let b = Complex::new(base, im);
            prop_assert!(Verifier::default().check_difference_of_squares(&a, &b).is_ok());
        }

        #[test]
        fn rationals_pass_exactly(n1 in -1000i64..1000, d1 in 1i64..1000, n2 in -1000i64..1000, d2 in 1i64..1000) {
            let a = Rational::from_i64(n1, d1).unwrap();
            let b = Rational::from_i64(n2, d2).unwrap();
            let verifier = Verifier::default();
            prop_assert!(verifier.check_square_of_sum(&a, &b).is_ok());
            prop_assume!(!(&a + &b).is_zero());
            prop_assert!(verifier.check_difference_of_squares(&a, &b).is_ok());
        }
    }
}
