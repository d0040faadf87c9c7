use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{scope::Scope, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Scope {
    /// Evaluates an expression tree against this scope.
    ///
    /// The scope is only read. A variable evaluates to its binding times its
    /// coefficient; operators broadcast over lists.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnboundVariable`] for a variable without a
    /// binding.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     interpreter::{parser::core::parse, scope::Scope, value::{complex::Complex, core::Value}},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.bind('x', Complex::from(3));
    ///
    /// let value = scope.evaluate(&parse("2x^2").unwrap()).unwrap();
    /// assert_eq!(value, Value::Scalar(Complex::from(18)));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Scalar(*value)),
            Expr::Variable { name, coefficient } => {
                let bound = self.get(*name)
                                .ok_or(RuntimeError::UnboundVariable { name: *name })?;
                Ok(bound.map(|value| value * *coefficient))
            },
            Expr::Operator { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(Self::eval_binary(*op, &left, &right))
            },
            Expr::List { values } => Ok(Value::List(values.clone())),
        }
    }
}
