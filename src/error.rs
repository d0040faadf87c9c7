use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, malformed numbers, and token sequences that
/// do not match the grammar. Each carries the byte offset of the failure.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and equation
/// resolution, such as unbound variables and equations whose unknown cannot be
/// isolated.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while turning source text into a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed input could not be evaluated or resolved.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A line of a script failed.
    #[error("Error on line {line}: {source}")]
    Script {
        /// 1-based line number within the script.
        line:   usize,
        /// The underlying failure.
        source: Box<Self>,
    },
}
