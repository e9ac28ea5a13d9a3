use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{
        converter::options::ConvertOptions,
        lexer::{Lexeme, Token, scan_infix},
        operator::{Associativity, Operator},
    },
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Infix-to-postfix converter.
///
/// Stateless apart from its options: every call builds its own output list
/// and operator stack, so one converter can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    #[must_use]
    pub const fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Returns the options this converter was built with.
    #[must_use]
    pub const fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Converts an infix expression to a postfix token sequence.
    ///
    /// Numbers go straight to the output. `(` is pushed on the operator
    /// stack; `)` pops operators into the output down to the nearest `(`,
    /// which is discarded. An operator first pops every stacked operator
    /// that binds at least as tightly (strictly tighter for a
    /// right-associative `^`), then is pushed. Whatever remains on the stack
    /// is popped into the output at the end.
    ///
    /// In lenient mode unknown characters are skipped, a `)` without a
    /// partner pops nothing further, and leftover `(` tokens are emitted
    /// as-is.
    ///
    /// # Errors
    /// Only in strict mode:
    /// - `UnexpectedCharacter` for text that is not part of any token.
    /// - `UnmatchedClosingParen` for a `)` with no open `(`.
    /// - `UnclosedParen` for a `(` still open at the end.
    ///
    /// # Example
    /// ```
    /// use stackviz::{ConvertOptions, Converter};
    ///
    /// let lenient = Converter::default();
    /// assert_eq!(lenient.convert("(1 + 2").unwrap(), ["1", "2", "+", "("]);
    ///
    /// let strict = Converter::new(ConvertOptions::strict());
    /// assert!(strict.convert("(1 + 2").is_err());
    /// ```
    pub fn convert(&self, expression: &str) -> ParseResult<Vec<String>> {
        trace!(expression, strict = self.options.strict, "converting infix expression");

        let mut output: Vec<String> = Vec::new();
        let mut pending: Vec<Lexeme<'_>> = Vec::new();

        for item in scan_infix(expression) {
            let lexeme = match item {
                Ok(lexeme) => lexeme,
                Err(unknown) => {
                    if self.options.strict {
                        return Err(ParseError::UnexpectedCharacter {
                            character: unknown.text.to_string(),
                            position:  column(expression, unknown.span.start),
                        });
                    }
                    debug!(text = unknown.text, "dropping unrecognized input");
                    continue;
                },
            };

            match lexeme.token {
                Token::Number(_) => output.push(lexeme.text.to_string()),
                Token::LParen => pending.push(lexeme),
                Token::RParen => loop {
                    match pending.pop() {
                        Some(Lexeme { token: Token::LParen, .. }) => break,
                        Some(top) => output.push(top.text.to_string()),
                        None => {
                            if self.options.strict {
                                return Err(ParseError::UnmatchedClosingParen {
                                    position: column(expression, lexeme.span.start),
                                });
                            }
                            debug!("closing parenthesis without a match");
                            break;
                        },
                    }
                },
                Token::Operator(op) => {
                    while let Some(top) = pending.last()
                          && let Token::Operator(top_op) = top.token
                          && self.pops_before(top_op, op)
                    {
                        output.push(top_op.symbol().to_string());
                        pending.pop();
                    }
                    pending.push(lexeme);
                },
            }
        }

        while let Some(top) = pending.pop() {
            if self.options.strict && top.token == Token::LParen {
                return Err(ParseError::UnclosedParen { position: column(expression,
                                                                        top.span.start) });
            }
            output.push(top.text.to_string());
        }

        trace!(postfix = %output.join(" "), "conversion finished");
        Ok(output)
    }

    /// Whether the stacked operator `top` must be emitted before `incoming`
    /// is pushed.
    const fn pops_before(&self, top: Operator, incoming: Operator) -> bool {
        match incoming.associativity(self.options.power) {
            Associativity::Left => top.precedence() >= incoming.precedence(),
            Associativity::Right => top.precedence() > incoming.precedence(),
        }
    }
}

/// Converts an infix expression to postfix with the default lenient
/// options. Never fails; malformed input degrades silently.
///
/// # Example
/// ```
/// use stackviz::convert;
///
/// assert_eq!(convert("5 * (3 + 2)"), ["5", "3", "2", "+", "*"]);
/// assert_eq!(convert("2 ^ 3 + 4"), ["2", "3", "^", "4", "+"]);
/// ```
#[must_use]
pub fn convert(expression: &str) -> Vec<String> {
    Converter::default().convert(expression).unwrap_or_default()
}

/// Joins postfix tokens with single spaces, ready to be evaluated.
///
/// # Example
/// ```
/// use stackviz::{convert, to_postfix_string};
///
/// assert_eq!(to_postfix_string(&convert("(8+2)*(5-3)")), "8 2 + 5 3 - *");
/// ```
#[must_use]
pub fn to_postfix_string(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// 1-based character column of a byte offset.
fn column(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
