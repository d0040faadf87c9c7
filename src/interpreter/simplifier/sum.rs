use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        simplifier::core::{constants, fold},
        value::{
            complex::{Complex, ZERO},
            core::Value,
        },
    },
};

/// Simplifies `left + right`.
pub(super) fn add(left: Expr, right: Expr) -> Expr {
    sum(BinaryOperator::Add, left, right)
}

/// Simplifies `left - right`.
pub(super) fn subtract(left: Expr, right: Expr) -> Expr {
    sum(BinaryOperator::Sub, left, right)
}

/// An additive node with one constant child, split into its signed constant
/// and the remaining operand.
///
/// `A + c`, `c + A` and `A - c` keep `A` positive; `c - A` negates it.
struct Split {
    constant:     Value,
    rest:         Expr,
    rest_negated: bool,
}

impl Split {
    fn of(expr: &Expr) -> Option<Self> {
        let Expr::Operator { op, left, right } = expr else {
            return None;
        };
        let negated = match op {
            BinaryOperator::Add => false,
            BinaryOperator::Sub => true,
            _ => return None,
        };

        if let Some(constant) = right.as_constant() {
            let constant = if negated { constant.map(|c| -c) } else { constant };
            return Some(Self { constant,
                               rest: (**left).clone(),
                               rest_negated: false });
        }
        left.as_constant().map(|constant| Self { constant,
                                                 rest: (**right).clone(),
                                                 rest_negated: negated })
    }

    /// `rest ± total`, with the sign of `rest` preserved.
    fn rebuild(self, total: &Value) -> Expr {
        let total = Expr::from(total.clone());
        if self.rest_negated {
            subtract(total, self.rest)
        } else {
            add(self.rest, total)
        }
    }
}

fn signed(value: &Value, negated: bool) -> Value {
    if negated { value.map(|c| -c) } else { value.clone() }
}

fn collect(name: char, coefficient: Complex) -> Expr {
    if coefficient == ZERO {
        Expr::number(ZERO)
    } else {
        Expr::Variable { name, coefficient }
    }
}

fn sum(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    let negated = op == BinaryOperator::Sub;

    if let Some((l, r)) = constants(&left, &right) {
        return fold(op, &l, &r);
    }
    if right.is_number(ZERO) {
        return left;
    }
    if left.is_number(ZERO) {
        if !negated {
            return right;
        }
        if let Expr::Variable { name, coefficient } = right {
            return collect(name, -coefficient);
        }
    }

    if let (Expr::Variable { name: a, coefficient: ca }, Expr::Variable { name: b, coefficient: cb }) =
        (&left, &right)
       && a == b
    {
        let coefficient = if negated { *ca - *cb } else { *ca + *cb };
        return collect(*a, coefficient);
    }
    if matches!(left, Expr::Variable { .. }) || matches!(right, Expr::Variable { .. }) {
        return Expr::operator(op, left, right);
    }

    // (A ± c) ± k: fold c and k.
    if let Some(k) = right.as_constant()
       && let Some(split) = Split::of(&left)
    {
        let total = split.constant.broadcast(&signed(&k, negated), |c, k| c + k);
        return split.rebuild(&total);
    }
    // k ± (A ± c): fold k and c, flipping the sign of A under subtraction.
    if let Some(k) = left.as_constant()
       && let Some(mut split) = Split::of(&right)
    {
        let total = k.broadcast(&signed(&split.constant, negated), |k, c| k + c);
        split.rest_negated ^= negated;
        return split.rebuild(&total);
    }

    Expr::operator(op, left, right)
}
