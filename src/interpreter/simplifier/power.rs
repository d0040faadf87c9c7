use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        simplifier::{
            core::{constants, fold},
            product::{divide, multiply},
        },
        value::{
            complex::{ONE, ZERO},
            core::Value,
        },
    },
};

/// Simplifies `base ^ exponent`.
///
/// Exponents `0` and `1` fold away. Products, quotients and powers in the
/// base take the exponent onto each of their children, and a variable's
/// coefficient is raised separately: `(3x)^2` becomes `9 * x^2`.
pub(super) fn power(base: Expr, exponent: Expr) -> Expr {
    if exponent.is_number(ZERO) {
        return Expr::number(ONE);
    }
    if exponent.is_number(ONE) {
        return base;
    }
    if let Some((b, e)) = constants(&base, &exponent) {
        return fold(BinaryOperator::Pow, &b, &e);
    }

    match base {
        Expr::Operator { op: BinaryOperator::Mul,
                         left,
                         right, } => multiply(power(*left, exponent.clone()), power(*right, exponent)),
        Expr::Operator { op: BinaryOperator::Div,
                         left,
                         right, } => divide(power(*left, exponent.clone()), power(*right, exponent)),
        Expr::Operator { op: BinaryOperator::Pow,
                         left,
                         right, } => power(*left, multiply(*right, exponent)),
        Expr::Variable { name, coefficient } if coefficient != ONE => match exponent.as_constant() {
            Some(e) => {
                let factor = fold(BinaryOperator::Pow, &Value::Scalar(coefficient), &e);
                multiply(factor, Expr::operator(BinaryOperator::Pow, Expr::variable(name), exponent))
            },
            None => Expr::operator(BinaryOperator::Pow, Expr::Variable { name, coefficient }, exponent),
        },
        base => Expr::operator(BinaryOperator::Pow, base, exponent),
    }
}
