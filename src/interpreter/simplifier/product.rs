use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        simplifier::core::{constants, fold, rewrite},
        value::{
            complex::{Complex, ONE, TWO, ZERO},
            core::Value,
        },
    },
};

use BinaryOperator::{Add, Div, Mul, Pow, Sub};

/// `coefficient * expr`, omitting a unit coefficient.
fn scale(coefficient: Complex, expr: Expr) -> Expr {
    if coefficient == ONE {
        expr
    } else {
        Expr::operator(Mul, Expr::number(coefficient), expr)
    }
}

/// Simplifies `left * right`.
pub(super) fn multiply(left: Expr, right: Expr) -> Expr {
    if let Some((l, r)) = constants(&left, &right) {
        return fold(Mul, &l, &r);
    }
    if left.is_number(ONE) {
        return right;
    }
    if right.is_number(ONE) {
        return left;
    }
    if left.is_number(ZERO) || right.is_number(ZERO) {
        return Expr::number(ZERO);
    }

    match (&left, &right) {
        (Expr::Variable { name: a, coefficient: ca }, Expr::Variable { name: b, coefficient: cb }) => {
            let product = if a == b {
                Expr::operator(Pow, Expr::variable(*a), Expr::number(TWO))
            } else {
                Expr::operator(Mul, Expr::variable(*a), Expr::variable(*b))
            };
            return scale(*ca * *cb, product);
        },
        (Expr::Variable { name, coefficient }, Expr::Number { value })
        | (Expr::Number { value }, Expr::Variable { name, coefficient }) => {
            return Expr::Variable { name:        *name,
                                    coefficient: *coefficient * *value, };
        },
        _ => {},
    }

    if let Some(expr) = distribute(Mul, &left, &right) {
        return expr;
    }
    if let Some(expr) = regroup_product(&left, &right).or_else(|| regroup_product(&right, &left)) {
        return expr;
    }

    Expr::operator(Mul, left, right)
}

/// Simplifies `left / right`.
pub(super) fn divide(left: Expr, right: Expr) -> Expr {
    if let Some((l, r)) = constants(&left, &right) {
        return fold(Div, &l, &r);
    }
    if right.is_number(ONE) {
        return left;
    }

    match (&left, &right) {
        (Expr::Variable { name: a, coefficient: ca }, Expr::Variable { name: b, coefficient: cb }) => {
            let ratio = *ca / *cb;
            if a == b {
                return Expr::number(ratio);
            }
            return scale(ratio, Expr::operator(Div, Expr::variable(*a), Expr::variable(*b)));
        },
        (Expr::Variable { name, coefficient }, Expr::Number { value }) => {
            return Expr::Variable { name:        *name,
                                    coefficient: *coefficient / *value, };
        },
        _ => {},
    }

    if let Some(expr) = distribute(Div, &left, &right) {
        return expr;
    }
    if let Some(k) = right.as_constant()
       && let Some(expr) = regroup_quotient(&left, &k)
    {
        return expr;
    }

    Expr::operator(Div, left, right)
}

/// Distributes `op` over a sum or difference combined with a non-operator.
///
/// `(A ± B) op k` becomes `A op k ± B op k`. For multiplication the mirrored
/// `k * (A ± B)` distributes too.
fn distribute(op: BinaryOperator, left: &Expr, right: &Expr) -> Option<Expr> {
    if let Expr::Operator { op: inner @ (Add | Sub),
                            left: a,
                            right: b, } = left
       && !right.is_operator()
    {
        return Some(rewrite(*inner,
                            rewrite(op, (**a).clone(), right.clone()),
                            rewrite(op, (**b).clone(), right.clone())));
    }
    if op == Mul
       && let Expr::Operator { op: inner @ (Add | Sub),
                               left: a,
                               right: b, } = right
       && !left.is_operator()
    {
        return Some(rewrite(*inner,
                            multiply(left.clone(), (**a).clone()),
                            multiply(left.clone(), (**b).clone())));
    }
    None
}

/// Folds a constant factor into a product or quotient that already has one:
/// `c * (k * A)` is `(c * k) * A`, `c * (A / k)` is `(c / k) * A`, and
/// `c * (k / A)` is `(c * k) / A`.
fn regroup_product(constant: &Expr, other: &Expr) -> Option<Expr> {
    let c = constant.as_constant()?;
    let Expr::Operator { op, left, right } = other else {
        return None;
    };

    match op {
        Mul => {
            if let Some(k) = left.as_constant() {
                Some(multiply(fold(Mul, &c, &k), (**right).clone()))
            } else {
                right.as_constant().map(|k| multiply(fold(Mul, &c, &k), (**left).clone()))
            }
        },
        Div => {
            if let Some(k) = right.as_constant() {
                Some(multiply(fold(Div, &c, &k), (**left).clone()))
            } else {
                left.as_constant().map(|k| divide(fold(Mul, &c, &k), (**right).clone()))
            }
        },
        _ => None,
    }
}

/// Folds a constant divisor into a product or quotient that already has a
/// constant: `(c * A) / k` is `(c / k) * A`, `(A / c) / k` is `A / (c * k)`,
/// and `(c / A) / k` is `(c / k) / A`.
fn regroup_quotient(other: &Expr, k: &Value) -> Option<Expr> {
    let Expr::Operator { op, left, right } = other else {
        return None;
    };

    match op {
        Mul => {
            if let Some(c) = left.as_constant() {
                Some(multiply(fold(Div, &c, k), (**right).clone()))
            } else {
                right.as_constant().map(|c| multiply(fold(Div, &c, k), (**left).clone()))
            }
        },
        Div => {
            if let Some(c) = right.as_constant() {
                Some(divide((**left).clone(), fold(Mul, &c, k)))
            } else {
                left.as_constant().map(|c| divide(fold(Div, &c, k), (**right).clone()))
            }
        },
        _ => None,
    }
}
