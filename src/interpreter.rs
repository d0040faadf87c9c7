/// The evaluator module folds expression trees into values.
///
/// The evaluator traverses the AST, looks variables up in the scope, and
/// applies the arithmetic operators, broadcasting over lists of roots. It never
/// changes the scope.
///
/// # Responsibilities
/// - Evaluates every node kind to a `Value`.
/// - Reports variables without a binding.
/// - Lets floating-point domain problems surface as `NaN` or infinity.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// numbers, operators, brackets, the constants `i`, `e` and `π`, and
/// single-letter variables, each paired with its byte offset.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Rejects unknown characters and numbers with two decimal points.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over an index cursor. Precedence runs from
/// values through powers and products to sums, with implicit multiplication
/// wherever a value follows another term directly.
///
/// # Responsibilities
/// - Converts tokens into `Expr` trees.
/// - Reports grammar violations with the offending position.
pub mod parser;
/// Equation resolution.
///
/// Solves one-variable equations by simplifying both sides and inverting the
/// operators around the unknown, writing the result into the scope.
///
/// # Responsibilities
/// - Distinguishes bare expressions from equations.
/// - Isolates the unknown, producing every root of integer powers.
/// - Reports equations that are malformed or cannot be isolated.
pub mod resolver;
/// The variable binding table shared by evaluation, simplification and
/// resolution.
pub mod scope;
/// Symbolic simplification.
///
/// Rewrites expression trees with constant folding, substitution of bound
/// variables and algebraic identities, leaving unbound variables symbolic.
pub mod simplifier;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the normalized `Complex` number and its arithmetic.
/// - Defines `Value`, a number or a list of numbers, with broadcasting.
pub mod value;
