/// Complex number support.
///
/// Defines the `Complex` type and its named constants. Every constructor
/// normalizes its components, so arithmetic results carry no visible
/// floating-point noise. Includes the arithmetic operators (mixed with plain
/// `f64` on either side), the transcendental functions, rounding, and the
/// multi-valued `nth_roots`.
pub mod complex;

/// The `Value` enum: a single number or a list of numbers, with element-wise
/// broadcasting.
pub mod core;
