#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during a strict infix conversion.
///
/// Positions are 1-based character columns in the infix source.
pub enum ParseError {
    /// A character that is neither part of a number, an operator nor a
    /// parenthesis.
    UnexpectedCharacter {
        /// The offending text.
        character: String,
        /// The column where it was found.
        position:  usize,
    },
    /// A `)` with no matching `(` before it.
    UnmatchedClosingParen {
        /// The column of the `)`.
        position: usize,
    },
    /// A `(` that was never closed.
    UnclosedParen {
        /// The column of the `(`.
        position: usize,
    },
}

impl ParseError {
    /// Returns the column the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnmatchedClosingParen { position }
            | Self::UnclosedParen { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at column {position}.")
            },
            Self::UnmatchedClosingParen { position } => {
                write!(f, "Closing parenthesis ')' at column {position} has no matching '('.")
            },
            Self::UnclosedParen { position } => {
                write!(f, "Parenthesis '(' at column {position} is never closed.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
