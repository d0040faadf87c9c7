use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        scope::Scope,
        simplifier::{
            power::power,
            product::{divide, multiply},
            sum::{add, subtract},
        },
        value::core::Value,
    },
};

impl Scope {
    /// Rewrites an expression tree into a reduced equivalent one.
    ///
    /// Bound variables are substituted by their values, constant subtrees are
    /// folded, and the algebraic identities of the `sum`, `product` and
    /// `power` rules are applied bottom-up. Unbound variables stay symbolic,
    /// so a partially bound expression is partially evaluated. Simplification
    /// never fails: in the worst case the tree comes back unreduced.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{parser::core::parse, scope::Scope, value::complex::Complex},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.bind('y', Complex::from(3));
    ///
    /// let simplified = scope.simplify(&parse("2x + y").unwrap());
    /// assert_eq!(simplified,
    ///            Expr::operator(BinaryOperator::Add,
    ///                           Expr::Variable { name: 'x', coefficient: Complex::from(2) },
    ///                           Expr::number(3)));
    /// ```
    #[must_use]
    pub fn simplify(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Number { .. } | Expr::List { .. } => expr.clone(),
            Expr::Variable { name, coefficient } => match self.get(*name) {
                Some(bound) => Expr::from(bound.map(|value| value * *coefficient)),
                None => expr.clone(),
            },
            Expr::Operator { op, left, right } => {
                rewrite(*op, self.simplify(left), self.simplify(right))
            },
        }
    }
}

/// Combines two already simplified operands under `op`.
pub(super) fn rewrite(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    match op {
        BinaryOperator::Add => add(left, right),
        BinaryOperator::Sub => subtract(left, right),
        BinaryOperator::Mul => multiply(left, right),
        BinaryOperator::Div => divide(left, right),
        BinaryOperator::Pow => power(left, right),
    }
}

/// Folds two constants into one node, broadcasting over lists.
pub(super) fn fold(op: BinaryOperator, left: &Value, right: &Value) -> Expr {
    Expr::from(Scope::eval_binary(op, left, right))
}

/// Both operands as constants, if they are.
pub(super) fn constants(left: &Expr, right: &Expr) -> Option<(Value, Value)> {
    Some((left.as_constant()?, right.as_constant()?))
}
