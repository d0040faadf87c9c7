use crate::{
    ast::BinaryOperator,
    interpreter::{scope::Scope, value::core::Value},
};

impl Scope {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Scalars combine directly. If either side is a list, the operator is
    /// applied to every pairing of elements, left varying slowest.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::BinaryOperator,
    ///     interpreter::{scope::Scope, value::{complex::Complex, core::Value}},
    /// };
    ///
    /// let roots = Value::List(vec![Complex::from(2), Complex::from(-2)]);
    /// let shifted = Scope::eval_binary(BinaryOperator::Add, &roots, &Complex::from(1).into());
    ///
    /// assert_eq!(shifted, Value::List(vec![Complex::from(3), Complex::from(-1)]));
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        left.broadcast(right, |l, r| op.apply(l, r))
    }
}
