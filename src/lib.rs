//! # complexa
//!
//! complexa is a small computer-algebra engine for complex numbers written in
//! Rust. It parses and evaluates expressions such as `e^(πi)` or `2x^2 + 1`,
//! simplifies them symbolically, and solves one-variable equations such as
//! `x^3 = 8`, returning every root.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The AST is built by the parser and
/// consumed by the evaluator, the simplifier and the resolver.
///
/// # Responsibilities
/// - Defines the four node kinds: numbers, scaled variables, operators and
///   lists.
/// - Renders trees back to readable infix text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// evaluating or resolving. Floating-point domain problems are not errors;
/// they propagate as `NaN` or infinite components.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and details for context.
pub mod error;
/// Orchestrates the entire process of evaluation and resolution.
///
/// This module ties together lexing, parsing, evaluation, simplification and
/// equation resolution around a shared variable scope.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for evaluating expressions and solving equations.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric rounding and conversion.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    interpreter::{
        lexer::tokenize,
        parser::core::parse,
        resolver::core::Resolution,
        scope::Scope,
        value::{complex::Complex, core::Value},
    },
};

/// Parses and evaluates an expression against `scope`.
///
/// # Examples
/// ```
/// use complexa::{Complex, Scope, Value, evaluate};
///
/// let value = evaluate("e^(πi)", &Scope::new()).unwrap();
/// assert_eq!(value, Value::Scalar(Complex::from(-1)));
/// assert_eq!(value.to_string(), "-1");
///
/// assert!(evaluate("x + 1", &Scope::new()).is_err());
/// ```
pub fn evaluate(source: &str, scope: &Scope) -> Result<Value, Error> {
    Ok(scope.evaluate(&parse(source)?)?)
}

/// Evaluates an expression or solves an equation, updating `scope`.
///
/// See [`Scope::resolve`].
pub fn resolve(source: &str, scope: &mut Scope) -> Result<Resolution, Error> {
    scope.resolve(source)
}

/// Resolves every line of a script in order against one scope.
///
/// Blank lines and lines starting with `//` are skipped. Each equation can use
/// the bindings derived by the lines before it.
///
/// # Errors
/// Returns the first failure wrapped in [`Error::Script`] with its 1-based
/// line number.
///
/// # Examples
/// ```
/// use complexa::{Scope, run_script};
///
/// let mut scope = Scope::new();
/// let results = run_script("// roots first\nx^2 = 9\ny = x + 1\n", &mut scope).unwrap();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].to_string(), "y = [4, -2]");
///
/// // Example with an intentional error on line 2.
/// let err = run_script("x = 1\nx + z", &mut Scope::new()).unwrap_err();
/// assert!(err.to_string().starts_with("Error on line 2"));
/// ```
pub fn run_script(source: &str, scope: &mut Scope) -> Result<Vec<Resolution>, Error> {
    let mut results = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let resolution = scope.resolve(line)
                              .map_err(|e| Error::Script { line:   index + 1,
                                                           source: Box::new(e), })?;
        results.push(resolution);
    }

    Ok(results)
}
