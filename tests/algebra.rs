use complexa::{
    Complex, Error, Expr, Resolution, Scope, Value,
    error::{ParseError, RuntimeError},
    parse, resolve,
};

fn simplified(src: &str) -> String {
    Scope::new().simplify(&parse(src).unwrap()).to_string()
}

fn solve(src: &str) -> Value {
    match resolve(src, &mut Scope::new()) {
        Ok(Resolution::Binding { value, .. }) => value,
        Ok(other) => panic!("{src} did not bind a variable: {other}"),
        Err(e) => panic!("Resolving {src} failed: {e}"),
    }
}

fn scalar(value: impl Into<Complex>) -> Value {
    Value::Scalar(value.into())
}

fn list(values: &[i32]) -> Value {
    Value::List(values.iter().copied().map(Complex::from).collect())
}

fn assert_unresolvable(src: &str) {
    match resolve(src, &mut Scope::new()) {
        Err(Error::Runtime(RuntimeError::UnresolvableEquation { .. })) => {},
        other => panic!("{src}: expected an unresolvable equation, got {other:?}"),
    }
}

fn assert_invalid(src: &str) {
    match resolve(src, &mut Scope::new()) {
        Err(Error::Runtime(RuntimeError::InvalidEquation { .. })) => {},
        other => panic!("{src}: expected an invalid equation, got {other:?}"),
    }
}

#[test]
fn constants_fold() {
    assert_eq!(simplified("1 + 2 * 3"), "7");
    assert_eq!(simplified("(1 + i)(1 - i)"), "2");
    assert_eq!(simplified("x + (2 + 3)"), "x + 5");
}

#[test]
fn additive_identities() {
    assert_eq!(simplified("x + 0"), "x");
    assert_eq!(simplified("0 + x"), "x");
    assert_eq!(simplified("x - 0"), "x");
    assert_eq!(simplified("0 - x"), "-x");
    assert_eq!(simplified("-3x"), "-3x");
}

#[test]
fn like_terms_collect() {
    assert_eq!(simplified("2x + 3x"), "5x");
    assert_eq!(simplified("x - 4x"), "-3x");
    assert_eq!(simplified("x - x"), "0");
    assert_eq!(simplified("x + y"), "x + y");
}

#[test]
fn constants_regroup_across_sums() {
    assert_eq!(simplified("(x^2 + 1) + 2"), "(x ^ 2) + 3");
    assert_eq!(simplified("(x^2 - 1) + 1"), "x ^ 2");
    assert_eq!(simplified("5 - (x^2 + 2)"), "3 - (x ^ 2)");
    assert_eq!(simplified("x + 1 + 2"), "x + 3");
}

#[test]
fn multiplicative_identities() {
    assert_eq!(simplified("x * 1"), "x");
    assert_eq!(simplified("1 * x"), "x");
    assert_eq!(simplified("x * 0"), "0");
    assert_eq!(simplified("x / 1"), "x");
}

#[test]
fn coefficients_absorb_constant_factors() {
    assert_eq!(simplified("2 * x * 3"), "6x");
    assert_eq!(simplified("4x / 2"), "2x");
    assert_eq!(simplified("x * i"), "(i)x");
    assert_eq!(simplified("x (1 + i)"), "(1+i)x");
}

#[test]
fn variables_multiply_and_divide() {
    assert_eq!(simplified("x * x"), "x ^ 2");
    assert_eq!(simplified("2x * 3x"), "6 * (x ^ 2)");
    assert_eq!(simplified("x y"), "x * y");
    assert_eq!(simplified("(6x) / (3x)"), "2");
    assert_eq!(simplified("x / y"), "x / y");
}

#[test]
fn products_distribute_over_sums() {
    assert_eq!(simplified("2(x + 1)"), "(2x) + 2");
    assert_eq!(simplified("(x + 1) * 3"), "(3x) + 3");
    assert_eq!(simplified("(x - 2) / 2"), "(0.5x) - 1");
    assert_eq!(simplified("(x + 1) x"), "(x ^ 2) + x");
}

#[test]
fn constant_factors_regroup() {
    assert_eq!(simplified("2 * (x^2) * 3"), "6 * (x ^ 2)");
    assert_eq!(simplified("(6 * x^2) / 3"), "2 * (x ^ 2)");
    assert_eq!(simplified("(x^2 / 2) / 3"), "(x ^ 2) / 6");
}

#[test]
fn powers() {
    assert_eq!(simplified("x^0"), "1");
    assert_eq!(simplified("x^1"), "x");
    assert_eq!(simplified("(3x)^2"), "9 * (x ^ 2)");
    assert_eq!(simplified("(x^2)^3"), "x ^ 6");
    assert_eq!(simplified("(x y)^2"), "(x ^ 2) * (y ^ 2)");
}

#[test]
fn bound_variables_are_substituted() {
    let mut scope = Scope::new();
    scope.bind('y', Complex::from(3));

    let expr = scope.simplify(&parse("2x + y").unwrap());
    assert_eq!(expr.to_string(), "(2x) + 3");

    let expr = scope.simplify(&parse("2y").unwrap());
    assert_eq!(expr, Expr::number(6));
}

#[test]
fn bound_lists_are_substituted() {
    let mut scope = Scope::new();
    scope.bind('x', vec![Complex::from(2), Complex::from(-2)]);

    let expr = scope.simplify(&parse("x + 1").unwrap());
    assert_eq!(expr, Expr::List { values: vec![Complex::from(3), Complex::from(-1)] });
}

#[test]
fn expressions_without_equals_are_evaluated() {
    let resolution = resolve("1 + 1", &mut Scope::new()).unwrap();
    assert_eq!(resolution, Resolution::Value(scalar(2)));
    assert_eq!(resolution.to_string(), "2");
}

#[test]
fn linear_equations() {
    assert_eq!(solve("x + 2 = 4"), scalar(2));
    assert_eq!(solve("x - 2 = 4"), scalar(6));
    assert_eq!(solve("2x = 6"), scalar(3));
    assert_eq!(solve("x / 2 = 3"), scalar(6));
    assert_eq!(solve("3x + 2 = 11"), scalar(3));
    assert_eq!(solve("2(x + 1) = 10"), scalar(4));
    assert_eq!(solve("ix = 2"), scalar(Complex::new(0.0, -2.0)));
}

#[test]
fn unknown_on_the_right_of_an_operator() {
    assert_eq!(solve("10 - x = 4"), scalar(6));
    assert_eq!(solve("6 / x = 3"), scalar(2));
    assert_eq!(solve("1 + x = 0"), scalar(-1));
}

#[test]
fn unknown_on_the_right_hand_side() {
    assert_eq!(solve("3 = x + 1"), scalar(2));
    assert_eq!(solve("8 = 4y"), scalar(2));
}

#[test]
fn integer_powers_yield_every_root() {
    assert_eq!(solve("x^2 = 4"), list(&[2, -2]));
    assert_eq!(solve("x^2 + 1 = 10"), list(&[3, -3]));
    assert_eq!(solve("(2x)^2 = 16"), list(&[2, -2]));
    assert_eq!(solve("x^2 = -1"),
               Value::List(vec![Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]));

    let Value::List(roots) = solve("x^3 = 8") else {
        panic!("expected three roots");
    };
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[0], Complex::from(2));
}

#[test]
fn non_integer_powers_use_the_principal_root() {
    assert_eq!(solve("x^0.5 = 3"), scalar(9));
}

#[test]
fn exponential_equations_use_logarithms() {
    let value = solve("2^x = 8");
    let root = value.as_scalar().unwrap();
    assert!((root.real() - 3.0).abs() < 1e-9 && root.imaginary().abs() < 1e-9,
            "expected 3, got {root}");
}

#[test]
fn resolutions_are_bound_in_scope() {
    let mut scope = Scope::new();

    let resolution = resolve("x^2 = 9", &mut scope).unwrap();
    assert_eq!(resolution.to_string(), "x = [3, -3]");

    let resolution = resolve("y = 2x", &mut scope).unwrap();
    assert_eq!(resolution,
               Resolution::Binding { name:  'y',
                                     value: list(&[6, -6]), });

    let resolution = resolve("x y", &mut scope).unwrap();
    assert_eq!(resolution, Resolution::Value(list(&[18, -18, -18, 18])));
}

#[test]
fn later_equations_see_earlier_bindings() {
    let mut scope = Scope::new();
    resolve("a = 2", &mut scope).unwrap();
    resolve("b + a = 5", &mut scope).unwrap();

    assert_eq!(scope.get('b'), Some(&scalar(3)));
    assert_eq!(scope.to_string(), "{a = 2, b = 3}");
}

#[test]
fn malformed_equations_are_invalid() {
    assert_invalid("x = 1 = 2");
    assert_invalid("1 = 2");
    assert_invalid("x = y");
    assert_invalid("x - x = 1");
}

#[test]
fn equations_the_unknown_cannot_be_isolated_from() {
    assert_unresolvable("x + x^2 = 2");
    assert_unresolvable("x y = 2");
    assert_unresolvable("x^x = 4");
}

#[test]
fn right_hand_parse_errors_report_source_positions() {
    let err = resolve("x = 1 + #", &mut Scope::new()).unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::InvalidToken { token:    "#".to_string(),
                                                       position: 8, }));
}
