use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `addition := multiplication (("+" | "-") multiplication)*`
    pub(super) fn parse_addition(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplication()?;
        while let Some(op) = self.peek().and_then(Token::additive_operator) {
            self.advance();
            let right = self.parse_multiplication()?;
            left = Expr::operator(op, left, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Explicit `*` and `/` are left-associative. When the next token can
    /// start a value without an operator in between, the rest of the
    /// multiplicative chain is absorbed as the right operand of an implicit
    /// multiplication, so `2(3+4)5` reads as `2 * ((3+4) * 5)`.
    ///
    /// The rule is:
    /// `multiplication := power (("*" | "/") power)* multiplication?`
    pub(super) fn parse_multiplication(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_power()?;
        while let Some(op) = self.peek().and_then(Token::multiplicative_operator) {
            self.advance();
            let right = self.parse_power()?;
            left = Expr::operator(op, left, right);
        }
        if self.peek().is_some_and(Token::starts_value) {
            let right = self.parse_multiplication()?;
            return Ok(Expr::operator(BinaryOperator::Mul, left, right));
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Handles the right-associative `^` operator.
    ///
    /// The rule is: `power := value ("^" power_value)?`
    pub(super) fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_value()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.parse_power_value()?;
            return Ok(Expr::operator(BinaryOperator::Pow, base, exponent));
        }
        Ok(base)
    }

    /// Parses the exponent of a power.
    ///
    /// A directly following value continues the exponent as an implicit
    /// product, so `2^3x` is `2^(3x)`.
    ///
    /// The rule is: `power_value := power multiplication?`
    fn parse_power_value(&mut self) -> ParseResult<Expr> {
        let left = self.parse_power()?;
        if self.peek().is_some_and(Token::starts_value) {
            let right = self.parse_multiplication()?;
            return Ok(Expr::operator(BinaryOperator::Mul, left, right));
        }
        Ok(left)
    }
}
