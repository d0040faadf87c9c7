use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation and equation
/// resolution.
///
/// Floating-point domain problems such as division by zero are not errors;
/// they surface as `NaN` or infinite components of the result.
pub enum RuntimeError {
    /// Evaluation reached a variable that has no binding in scope.
    #[error("Unbound variable: {name}.")]
    UnboundVariable {
        /// The name of the variable.
        name: char,
    },
    /// The input is not a one-variable equation.
    #[error("Invalid equation: {details}.")]
    InvalidEquation {
        /// Why the equation was rejected.
        details: String,
    },
    /// The unknown could not be isolated.
    #[error("Unresolvable equation: {details}.")]
    UnresolvableEquation {
        /// The step at which isolation stopped.
        details: String,
    },
}
