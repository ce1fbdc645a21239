//! Property-based tests for the arithmetic contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use numera_integers::{ArithmeticError, Rational};

    use crate::{ApproxEq, Arithmetic, Complex};

    // Integral components keep products exact well inside f64 range
    fn small_complex() -> impl Strategy<Value = Complex> {
        (-1000i32..1000i32, -1000i32..1000i32)
            .prop_map(|(re, im)| Complex::new(f64::from(re), f64::from(im)))
    }

    fn component() -> impl Strategy<Value = f64> {
        prop_oneof![-1.0f64..1.0, -1e3f64..1e3, -1e9f64..1e9]
    }

    // Fractional and large components, so products round
    fn wide_complex() -> impl Strategy<Value = Complex> {
        (component(), component()).prop_map(|(re, im)| Complex::new(re, im))
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000i64, prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)])
            .prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn square_of_sum_holds<T: Arithmetic + ApproxEq>(a: &T, b: &T, tolerance: f64) -> bool {
        let sum = a.add(b);
        let ab = a.multiply(b);
        let expanded = a.square().add(&ab).add(&ab).add(&b.square());
        let scale = (a.magnitude() + b.magnitude()).powi(2);
        sum.square().approx_eq_scaled(&expanded, tolerance, scale)
    }

    fn difference_of_squares_holds<T: Arithmetic + ApproxEq>(a: &T, b: &T, tolerance: f64) -> bool {
        let lhs = a.square().subtract(&b.square());
        let rhs = a.subtract(b).multiply(&a.add(b));
        let scale = a.magnitude().max(b.magnitude()).powi(2);
        lhs.approx_eq_scaled(&rhs, tolerance, scale)
    }

    proptest! {
        #[test]
        fn rational_square_of_sum(a in small_rational(), b in small_rational()) {
            prop_assert!(square_of_sum_holds(&a, &b, 0.0));
        }

        #[test]
        fn rational_difference_of_squares(a in small_rational(), b in small_rational()) {
            prop_assert!(difference_of_squares_holds(&a, &b, 0.0));
        }

        #[test]
        fn complex_square_of_sum(a in small_complex(), b in small_complex()) {
            prop_assert!(square_of_sum_holds(&a, &b, 1e-9));
        }

        #[test]
        fn complex_difference_of_squares(a in small_complex(), b in small_complex()) {
            prop_assert!(difference_of_squares_holds(&a, &b, 1e-9));
        }

        #[test]
        fn wide_complex_square_of_sum(a in wide_complex(), b in wide_complex()) {
            prop_assert!(square_of_sum_holds(&a, &b, 1e-9));
        }

        #[test]
        fn wide_complex_difference_of_squares(a in wide_complex(), b in wide_complex()) {
            prop_assert!(difference_of_squares_holds(&a, &b, 1e-9));
        }

        #[test]
        fn wide_complex_divide_undoes_multiply(a in wide_complex(), b in wide_complex()) {
            prop_assume!(b.norm_sqr() != 0.0);
            let q = a.multiply(&b).divide(&b).unwrap();
            prop_assert!(q.approx_eq_scaled(&a, 1e-9, a.magnitude()));
        }

        #[test]
        fn complex_divide_undoes_multiply(a in small_complex(), b in small_complex()) {
            prop_assume!(b.norm_sqr() != 0.0);
            let q = a.multiply(&b).divide(&b).unwrap();
            prop_assert!(q.approx_eq(&a, 1e-9));
        }

        #[test]
        fn complex_zero_divisor_rejected(a in small_complex()) {
            prop_assert_eq!(a.divide(&Complex::new(0.0, 0.0)), Err(ArithmeticError::DivisionByZero));
        }

        #[test]
        fn complex_operands_unchanged(a in small_complex(), b in small_complex()) {
            let (a0, b0) = (a, b);
            let _ = a.add(&b);
            let _ = a.multiply(&b);
            let _ = a.divide(&b);
            prop_assert_eq!((a, b), (a0, b0));
        }
    }
}
