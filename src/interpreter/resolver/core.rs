use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::{Error, RuntimeError},
    interpreter::{parser::core::parse, scope::Scope, value::core::Value},
};

/// The outcome of resolving one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A bare expression and its value.
    Value(Value),
    /// A solved equation. The binding has already been written to the scope.
    Binding {
        /// The isolated variable.
        name:  char,
        /// Its value, a list when the equation has several roots.
        value: Value,
    },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Binding { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

impl Scope {
    /// Evaluates an expression or solves a one-variable equation.
    ///
    /// Input without `=` is evaluated against the scope. Input with one `=`
    /// is an equation: both sides are simplified, exactly one of them must
    /// still contain a variable, and that variable is isolated by inverting
    /// the outer operators of its side one at a time. The result is bound in
    /// this scope.
    ///
    /// # Errors
    /// - [`ParseError`](crate::error::ParseError) if either side fails to
    ///   parse.
    /// - [`RuntimeError::InvalidEquation`] if there is more than one `=`, or
    ///   if not exactly one side contains a variable.
    /// - [`RuntimeError::UnresolvableEquation`] if the variable cannot be
    ///   isolated.
    /// - [`RuntimeError::UnboundVariable`] when evaluating a bare expression
    ///   with a free variable.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::{
    ///     resolver::core::Resolution,
    ///     scope::Scope,
    ///     value::{complex::Complex, core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// let resolution = scope.resolve("x^2=4").unwrap();
    ///
    /// let roots = Value::List(vec![Complex::from(2), Complex::from(-2)]);
    /// assert_eq!(resolution, Resolution::Binding { name: 'x', value: roots.clone() });
    /// assert_eq!(scope.get('x'), Some(&roots));
    /// ```
    pub fn resolve(&mut self, source: &str) -> Result<Resolution, Error> {
        debug!(source, "resolving");
        let sides: Vec<&str> = source.split('=').collect();

        match sides.as_slice() {
            [expression] => Ok(Resolution::Value(self.evaluate(&parse(expression)?)?)),
            [left, right] => {
                let left = self.simplify(&parse(left)?);
                let right = self.simplify(&parse(right).map_err(|e| e.offset(sides[0].len() + 1))?);
                trace!(%left, %right, "simplified sides");

                let (unknown, known) = match (left.contains_variable(), right.contains_variable()) {
                    (true, false) => (left, right),
                    (false, true) => (right, left),
                    (true, true) => {
                        return Err(invalid_equation("both sides contain a variable"));
                    },
                    (false, false) => {
                        return Err(invalid_equation("neither side contains a variable"));
                    },
                };

                let (name, value) = self.isolate(unknown, known)?;
                Ok(Resolution::Binding { name, value })
            },
            _ => Err(invalid_equation(&format!("expected at most one '=', found {}",
                                               sides.len() - 1))),
        }
    }
}

fn invalid_equation(details: &str) -> Error {
    RuntimeError::InvalidEquation { details: details.to_string() }.into()
}
