/// Conversion errors.
///
/// Defines the errors a strict infix-to-postfix conversion can raise. The
/// lenient converter never produces them: unknown characters are dropped and
/// unbalanced parentheses degrade silently.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains every error the postfix evaluator can raise: unparseable tokens,
/// operators without enough operands, a stack that does not end with exactly
/// one value, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};
