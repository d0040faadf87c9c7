use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::complex::{Complex, E, I, PI, ZERO},
    },
};

impl Parser<'_> {
    /// Parses a value, the atom of the grammar.
    ///
    /// Values are:
    /// - a sub-expression in `()`, `[]` or `{}`
    /// - the constants `i`, `e` and `π`
    /// - a variable
    /// - a numeric literal
    /// - a unary minus applied to a value, read as `0 - value`
    ///
    /// Unary minus binds to the single following value only, so `-x^2` is
    /// `(0 - x)^2`.
    pub(super) fn parse_value(&mut self) -> ParseResult<Expr> {
        let Some((token, position)) = self.advance() else {
            return Err(self.unexpected_end());
        };

        match token {
            Token::LParen | Token::LBracket | Token::LBrace => self.parse_grouping(*token),
            Token::ImaginaryUnit => Ok(Expr::number(I)),
            Token::Euler => Ok(Expr::number(E)),
            Token::Pi => Ok(Expr::number(PI)),
            Token::Variable(name) => Ok(Expr::variable(*name)),
            Token::Number(value) => Ok(Expr::number(Complex::from(*value))),
            Token::Minus => {
                let value = self.parse_value()?;
                Ok(Expr::operator(BinaryOperator::Sub, Expr::number(ZERO), value))
            },
            _ => Err(ParseError::InvalidExpression { details:  format!("unexpected token '{token}'"),
                                                     position: *position, }),
        }
    }

    /// Parses a bracketed sub-expression after its opening bracket.
    ///
    /// The closing bracket must be of the same kind as `opening`.
    fn parse_grouping(&mut self, opening: Token) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        let closing = opening.closing();

        match self.peek() {
            Some(token) if Some(*token) == closing => {
                self.advance();
                Ok(expr)
            },
            _ => {
                let expected = closing.map_or_else(String::new, |token| token.to_string());
                Err(ParseError::InvalidExpression { details:  format!("expected closing '{expected}'"),
                                                    position: self.position(), })
            },
        }
    }
}
