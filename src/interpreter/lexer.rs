use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{ast::BinaryOperator, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    ///
    /// The regex accepts any run of digits and dots so that a second decimal
    /// point is reported as one invalid token instead of being split.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// The imaginary unit `i`.
    #[token("i")]
    ImaginaryUnit,
    /// Euler's number `e`.
    #[token("e")]
    Euler,
    /// `π`
    #[token("π")]
    Pi,
    /// Single-letter variables: any lowercase letter except `e` and `i`.
    #[regex("[a-df-hj-z]", |lex| lex.slice().chars().next())]
    Variable(char),
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if this token can begin a value, which is what makes a
    /// juxtaposition such as `2x` or `(a)(b)` an implicit multiplication.
    #[must_use]
    pub const fn starts_value(&self) -> bool {
        matches!(self,
                 Self::LParen
                 | Self::LBracket
                 | Self::LBrace
                 | Self::ImaginaryUnit
                 | Self::Euler
                 | Self::Pi
                 | Self::Variable(_)
                 | Self::Number(_))
    }

    /// The closing bracket matching an opening one.
    #[must_use]
    pub const fn closing(&self) -> Option<Self> {
        match self {
            Self::LParen => Some(Self::RParen),
            Self::LBracket => Some(Self::RBracket),
            Self::LBrace => Some(Self::RBrace),
            _ => None,
        }
    }

    /// `+` or `-` as an operator.
    #[must_use]
    pub const fn additive_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            _ => None,
        }
    }

    /// `*` or `/` as an operator.
    #[must_use]
    pub const fn multiplicative_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::ImaginaryUnit => write!(f, "i"),
            Self::Euler => write!(f, "e"),
            Self::Pi => write!(f, "π"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal, rejecting more than one decimal point.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return None;
    }
    slice.parse().ok()
}

/// Returns `true` if `name` may be used as a variable.
///
/// # Example
/// ```
/// use complexa::interpreter::lexer::is_variable_name;
///
/// assert!(is_variable_name('x'));
/// assert!(!is_variable_name('e'));
/// assert!(!is_variable_name('X'));
/// ```
#[must_use]
pub const fn is_variable_name(name: char) -> bool {
    name.is_ascii_lowercase() && name != 'e' && name != 'i'
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for the first character or numeric
/// literal the grammar does not accept.
///
/// # Example
/// ```
/// use complexa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2x + i").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Variable('x'), 1),
///                 (Token::Plus, 3),
///                 (Token::ImaginaryUnit, 5)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                  position });
        }
    }

    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
