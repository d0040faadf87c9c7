use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        scope::Scope,
        value::{
            complex::{Complex, ONE},
            core::Value,
        },
    },
    util::num::f64_to_u32_checked,
};

use BinaryOperator::{Add, Div, Mul, Pow, Sub};

fn unresolvable(details: String) -> RuntimeError {
    RuntimeError::UnresolvableEquation { details }
}

impl Scope {
    /// Solves `unknown = known` for the single variable in `unknown`.
    ///
    /// Both sides are re-simplified on every step. A bare variable is the
    /// terminal case: its coefficient is divided out and the value bound.
    /// Otherwise the outer operator of `unknown` is inverted onto `known` and
    /// the operand holding the variable is isolated next.
    pub(super) fn isolate(&mut self, unknown: Expr, known: Expr) -> EvalResult<(char, Value)> {
        let unknown = self.simplify(&unknown);
        let known = self.simplify(&known);
        trace!(%unknown, %known, "isolating");

        if known.contains_variable() {
            return Err(unresolvable(format!("'{known}' still contains a variable")));
        }

        match unknown {
            Expr::Variable { name, coefficient } => {
                let value = self.evaluate(&known)?.map(|v| v / coefficient);
                debug!(%name, %value, "bound variable");
                self.bind(name, value.clone());
                Ok((name, value))
            },
            Expr::Operator { op, left, right } => {
                match (left.contains_variable(), right.contains_variable()) {
                    (true, true) => {
                        Err(unresolvable(format!("the unknown occurs on both sides of '{op}'")))
                    },
                    (true, false) => self.peel_left(op, *left, *right, known),
                    (false, true) => self.peel_right(op, *left, *right, known),
                    (false, false) => Err(unresolvable("the unknown cancels out".to_string())),
                }
            },
            Expr::Number { .. } | Expr::List { .. } => {
                Err(unresolvable("the unknown cancels out".to_string()))
            },
        }
    }

    /// Inverts `unknown op k = known`.
    fn peel_left(&mut self,
                 op: BinaryOperator,
                 unknown: Expr,
                 k: Expr,
                 known: Expr)
                 -> EvalResult<(char, Value)> {
        match op {
            Add => self.isolate(unknown, Expr::operator(Sub, known, k)),
            Sub => self.isolate(unknown, Expr::operator(Add, known, k)),
            Mul => self.isolate(unknown, Expr::operator(Div, known, k)),
            Div => self.isolate(unknown, Expr::operator(Mul, known, k)),
            Pow => {
                let degree = match &k {
                    Expr::Number { value } => value.as_integer().and_then(f64_to_u32_checked),
                    _ => None,
                };
                match degree {
                    Some(degree) if degree > 0 => {
                        let roots = self.evaluate(&known)?.nth_roots(degree);
                        self.isolate(unknown, Expr::from(roots))
                    },
                    _ => {
                        let reciprocal = Expr::operator(Div, Expr::number(ONE), k);
                        self.isolate(unknown, Expr::operator(Pow, known, reciprocal))
                    },
                }
            },
        }
    }

    /// Inverts `k op unknown = known`.
    fn peel_right(&mut self,
                  op: BinaryOperator,
                  k: Expr,
                  unknown: Expr,
                  known: Expr)
                  -> EvalResult<(char, Value)> {
        match op {
            Add => self.isolate(unknown, Expr::operator(Sub, known, k)),
            Sub => self.isolate(unknown, Expr::operator(Sub, k, known)),
            Mul => self.isolate(unknown, Expr::operator(Div, known, k)),
            // k / x = R  =>  R * x = k
            Div => self.isolate(Expr::operator(Mul, known, unknown), k),
            Pow => {
                let base = self.evaluate(&k)?.map(Complex::ln);
                let logarithm = self.evaluate(&known)?.map(Complex::ln);
                self.isolate(unknown, Expr::operator(Div, Expr::from(logarithm), Expr::from(base)))
            },
        }
    }
}
