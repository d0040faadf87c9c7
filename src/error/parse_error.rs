use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character it does not recognize, or a numeric literal
    /// with more than one decimal point.
    #[error("Error at position {position}: Invalid token: {token}.")]
    InvalidToken {
        /// The offending source text.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// The token sequence does not match the grammar.
    #[error("Error at position {position}: Invalid expression: {details}.")]
    InvalidExpression {
        /// What the parser expected or found.
        details:  String,
        /// Byte offset where parsing failed.
        position: usize,
    },
}

impl ParseError {
    /// Shifts the reported position by `offset` bytes.
    ///
    /// Used when a fragment of a larger source was parsed on its own, such as
    /// the right-hand side of an equation.
    #[must_use]
    pub fn offset(self, offset: usize) -> Self {
        match self {
            Self::InvalidToken { token, position } => Self::InvalidToken { token,
                                                                           position: position + offset },
            Self::InvalidExpression { details, position } => {
                Self::InvalidExpression { details,
                                          position: position + offset }
            },
        }
    }

    /// Byte offset of the failure in the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidToken { position, .. } | Self::InvalidExpression { position, .. } => *position,
        }
    }
}
