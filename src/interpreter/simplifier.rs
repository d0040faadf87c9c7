/// Simplification entry point.
///
/// Walks the tree bottom-up, substitutes bound variables and dispatches each
/// operator node to its rewrite rules.
pub mod core;

/// Rules for `+` and `-`: constant folding, additive identities, like-term
/// collection and regrouping of constants.
mod sum;

/// Rules for `*` and `/`: identities, coefficient folding, distribution over
/// sums and regrouping of constant factors.
mod product;

/// Rules for `^`: trivial exponents and distribution of an exponent over
/// products, quotients and powers.
mod power;
