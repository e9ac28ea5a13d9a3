use crate::interpreter::operator::Operator;

/// The category of an evaluation failure, without its context.
///
/// Callers that only need to branch on what went wrong can match on this
/// instead of destructuring [`RuntimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token is neither an operator nor a number.
    InvalidToken,
    /// An operator was reached with fewer than two values on the stack.
    InsufficientOperands,
    /// The stack did not end with exactly one value.
    MalformedResult,
    /// The right operand of `/` was zero.
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix
/// expression.
///
/// Positions are the 1-based index of the token (and therefore of the step)
/// at which evaluation stopped.
pub enum RuntimeError {
    /// A token failed to parse as a number and is not an operator.
    InvalidToken {
        /// The token as written in the source.
        token:    String,
        /// The index of the token.
        position: usize,
    },
    /// An operator needed two operands but the stack held fewer.
    InsufficientOperands {
        /// The operator being applied.
        operator: Operator,
        /// The index of the operator token.
        position: usize,
    },
    /// All tokens were consumed but the stack does not hold exactly one
    /// value. Covers the empty stack as well.
    MalformedResult {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The index of the `/` token.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            Self::MalformedResult { .. } => ErrorKind::MalformedResult,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, .. } => write!(f, "Invalid token: {token}"),
            Self::InsufficientOperands { .. } => {
                write!(f, "Invalid expression: Not enough operands")
            },
            Self::MalformedResult { .. } => {
                write!(f, "Invalid expression: Multiple values remaining")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
