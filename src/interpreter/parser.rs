/// Parser state and entry points.
///
/// Defines the `Parser` cursor, the `ParseResult` alias, the top-level
/// `expression` rule and the `parse` convenience function.
pub mod core;

/// Binary operator parsing.
///
/// Implements the addition, multiplication and power levels of the grammar,
/// including implicit multiplication by juxtaposition.
pub mod binary;

/// Value parsing.
///
/// Handles the atoms of the grammar: brackets, constants, variables, numeric
/// literals and unary minus.
pub mod unary;
