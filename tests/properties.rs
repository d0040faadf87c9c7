//! Property-based tests for complex arithmetic and simplification.

use complexa::{Complex, Scope, Value, parse};
use proptest::prelude::*;

// Components that keep every product and sum exactly representable
fn integer_component() -> impl Strategy<Value = f64> {
    (-100i32..100).prop_map(f64::from)
}

fn integer_complex() -> impl Strategy<Value = Complex> {
    (integer_component(), integer_component()).prop_map(|(a, b)| Complex::new(a, b))
}

fn nonzero_complex() -> impl Strategy<Value = Complex> {
    integer_complex().prop_filter("divisor must be non-zero", |c| c.abs() > 0.0)
}

fn any_complex() -> impl Strategy<Value = Complex> {
    (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(a, b)| Complex::new(a, b))
}

// Small expressions over `x`, `i` and the digits, with literal exponents
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(1u8..10).prop_map(|n| n.to_string()),
                           Just("x".to_string()),
                           Just("i".to_string())];
    leaf.prop_recursive(2, 8, 2, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(vec!["+", "-", "*", "/"]), inner.clone())
                            .prop_map(|(left, op, right)| format!("({left} {op} {right})")),
                        (inner, 1u8..4).prop_map(|(base, exponent)| format!("({base})^{exponent}"))]
        })
}

fn close(left: Complex, right: Complex, tolerance: f64) -> bool {
    let scale = 1.0 + left.abs().max(right.abs());
    (left.real() - right.real()).abs() <= tolerance * scale
    && (left.imaginary() - right.imaginary()).abs() <= tolerance * scale
}

proptest! {
    #[test]
    fn absolute_is_real_magnitude(c in any_complex()) {
        let absolute = c.absolute();
        let expected = (c.real() * c.real() + c.imaginary() * c.imaginary()).sqrt();

        prop_assert_eq!(absolute.imaginary(), 0.0);
        prop_assert!((absolute.real() - expected).abs() <= 1e-9 * (1.0 + expected));
    }

    #[test]
    fn add_commutative(a in any_complex(), b in any_complex()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn mul_commutative(a in any_complex(), b in any_complex()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn add_associative(a in integer_complex(), b in integer_complex(), c in integer_complex()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn mul_associative(a in integer_complex(), b in integer_complex(), c in integer_complex()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn divide_inverts_multiply(a in integer_complex(), b in nonzero_complex()) {
        prop_assert!(close((a * b) / b, a, 1e-9));
    }

    #[test]
    fn square_matches_product(c in integer_complex()) {
        prop_assert!(close(c.pow(2), c * c, 1e-9));
    }

    #[test]
    fn nth_roots_are_roots(c in nonzero_complex(), n in 1u32..6) {
        let roots = c.nth_roots(n);
        prop_assert_eq!(roots.len(), n as usize);

        for root in &roots {
            let power = (1..n).fold(*root, |acc, _| acc * *root);
            prop_assert!(close(power, c, 1e-6), "{}^{} = {}, expected {}", root, n, power, c);
        }

        // Consecutive roots differ by a rotation of 2π/n
        let angle = std::f64::consts::TAU / f64::from(n);
        let step = Complex::new(angle.cos(), angle.sin());
        for pair in roots.windows(2) {
            prop_assert!(close(pair[1] / pair[0], step, 1e-6));
        }
    }

    #[test]
    fn simplification_preserves_value(src in expression()) {
        let expr = parse(&src).unwrap();

        let mut scope = Scope::new();
        scope.bind('x', Complex::new(1.5, -0.5));

        let direct = scope.evaluate(&expr).unwrap();
        let Value::Scalar(direct) = direct else {
            return Err(TestCaseError::fail("expected a scalar"));
        };
        prop_assume!(direct.is_finite() && direct.abs() < 1e6);

        let simplified = Scope::new().simplify(&expr);
        let Value::Scalar(value) = scope.evaluate(&simplified).unwrap() else {
            return Err(TestCaseError::fail("expected a scalar"));
        };

        prop_assert!(close(value, direct, 1e-6),
                     "{} simplified to {} gives {}, expected {}", src, simplified, value, direct);
    }
}
