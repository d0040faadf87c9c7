use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::{Token, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over an immutable token slice.
///
/// The parser only ever moves its cursor forward; every grammar rule is a
/// method that consumes the tokens it recognizes.
pub struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    cursor: usize,
    end:    usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// `end` is the position reported when the input runs out, usually the
    /// length of the source.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)], end: usize) -> Self {
        Self { tokens,
               cursor: 0,
               end }
    }

    /// Parses the whole token sequence into a single expression.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidExpression`] if the tokens do not form an
    /// expression or if tokens remain after it.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        if let Some((token, position)) = self.tokens.get(self.cursor) {
            return Err(ParseError::InvalidExpression { details:  format!("unexpected token '{token}'"),
                                                       position: *position, });
        }
        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// An addition, followed by an implicit multiplication with the rest of
    /// the input when the next token can start a value.
    ///
    /// Grammar: `expression := addition expression?`
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let left = self.parse_addition()?;
        if self.peek().is_some_and(Token::starts_value) {
            let right = self.parse_expression()?;
            return Ok(Expr::operator(BinaryOperator::Mul, left, right));
        }
        Ok(left)
    }

    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor).map(|(token, _)| token)
    }

    pub(super) fn advance(&mut self) -> Option<&'a (Token, usize)> {
        let entry = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(entry)
    }

    /// Position of the next token, or the end of input.
    pub(super) fn position(&self) -> usize {
        self.tokens.get(self.cursor).map_or(self.end, |(_, position)| *position)
    }

    pub(super) fn unexpected_end(&self) -> ParseError {
        ParseError::InvalidExpression { details:  "unexpected end of input".to_string(),
                                        position: self.end, }
    }
}

/// Tokenizes and parses `source` into an expression tree.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] if lexing fails and
/// [`ParseError::InvalidExpression`] if the tokens do not match the grammar.
///
/// # Example
/// ```
/// use complexa::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::core::parse,
/// };
///
/// let expr = parse("2x").unwrap();
/// assert_eq!(expr, Expr::operator(BinaryOperator::Mul, Expr::number(2), Expr::variable('x')));
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens, source.len()).parse()
}
