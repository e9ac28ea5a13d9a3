use std::ops::Range;

use logos::Logos;
use serde::Serialize;

use crate::{interpreter::operator::Operator, util::num::format_number};

/// Represents a lexical token of an arithmetic expression.
///
/// Infix sources are scanned with the derived lexer; postfix words are
/// classified one at a time with [`Token::classify`].
#[derive(Logos, Debug, PartialEq, Clone, Copy, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Numeric literals: digits with an optional fractional part, such as
    /// `42`, `2.5` or `3.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// One of `+ - * / ^ %`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    #[token("%", |_| Operator::Mod)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Classifies one whitespace-delimited postfix word.
    ///
    /// A word is an operator if it is exactly one of the six symbols,
    /// otherwise it must parse as a floating-point number. Words that parse
    /// to NaN are rejected like any other non-number, and the only spelled
    /// out infinity accepted is `Infinity` with an optional sign.
    ///
    /// # Example
    /// ```
    /// use stackviz::{Operator, Token};
    ///
    /// assert_eq!(Token::classify("%"), Some(Token::Operator(Operator::Mod)));
    /// assert_eq!(Token::classify("-2.5"), Some(Token::Number(-2.5)));
    /// assert_eq!(Token::classify("-Infinity"), Some(Token::Number(f64::NEG_INFINITY)));
    /// assert_eq!(Token::classify("inf"), None);
    /// assert_eq!(Token::classify("x"), None);
    /// ```
    #[must_use]
    pub fn classify(word: &str) -> Option<Self> {
        if let Some(op) = Operator::from_symbol(word) {
            return Some(Self::Operator(op));
        }

        let unsigned = word.strip_prefix(['+', '-']).unwrap_or(word);
        if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
            return None;
        }

        word.parse::<f64>().ok().filter(|n| !n.is_nan()).map(Self::Number)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// A token together with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    /// The classified token.
    pub token: Token,
    /// The exact slice of the source.
    pub text:  &'a str,
    /// Byte range of `text` in the source.
    pub span:  Range<usize>,
}

/// A slice of infix source that matched no token rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized<'a> {
    /// The exact slice of the source.
    pub text: &'a str,
    /// Byte range of `text` in the source.
    pub span: Range<usize>,
}

/// Scans an infix source lazily, keeping unrecognized slices as errors.
///
/// Whitespace is skipped. Every other character either belongs to a token or
/// is reported as an [`Unrecognized`] slice, in source order.
///
/// # Example
/// ```
/// use stackviz::interpreter::lexer::scan_infix;
///
/// let items: Vec<_> = scan_infix("2a + 3b").map(|item| item.is_ok()).collect();
/// assert_eq!(items, [true, false, true, true, false]);
/// ```
pub fn scan_infix(source: &str) -> impl Iterator<Item = Result<Lexeme<'_>, Unrecognized<'_>>> {
    Token::lexer(source).spanned().map(move |(token, span)| {
                                      let text = &source[span.clone()];
                                      match token {
                                          Ok(token) => Ok(Lexeme { token, text, span }),
                                          Err(()) => Err(Unrecognized { text, span }),
                                      }
                                  })
}

/// Tokenizes an infix source leniently and lazily.
///
/// Characters that are not part of a number, an operator or a parenthesis
/// are dropped without error; malformed input is left for later stages to
/// reject.
///
/// # Example
/// ```
/// use stackviz::interpreter::lexer::tokenize_infix;
///
/// let texts: Vec<_> = tokenize_infix("2x + (3.5)").map(|l| l.text).collect();
/// assert_eq!(texts, ["2", "+", "(", "3.5", ")"]);
/// ```
pub fn tokenize_infix(source: &str) -> impl Iterator<Item = Lexeme<'_>> {
    scan_infix(source).filter_map(Result::ok)
}

/// Splits a postfix source into its whitespace-delimited words, verbatim.
pub fn split_postfix(source: &str) -> impl Iterator<Item = &str> {
    source.split_whitespace()
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
