/// Equation entry point.
///
/// Splits the input on `=`, validates that exactly one side holds the
/// unknown, and defines the `Resolution` outcome.
pub mod core;

/// Isolation of the unknown by inverting operators top-down, including the
/// multi-valued roots of integer powers.
mod isolate;
