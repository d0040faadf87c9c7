/// Core evaluation logic for expression trees.
///
/// Contains the `EvalResult` alias and the recursive `evaluate` dispatch over
/// the node kinds.
pub mod core;

/// Binary operator evaluation.
///
/// Applies arithmetic operators to evaluated operands, broadcasting over
/// lists.
pub mod binary;
