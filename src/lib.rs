//! # stackviz
//!
//! stackviz evaluates postfix (reverse Polish) expressions on an explicit
//! operand stack, recording every push and operation so the evaluation can be
//! replayed step by step, and converts infix expressions to postfix with the
//! shunting-yard algorithm.
//!
//! ```
//! use stackviz::{convert, evaluate, to_postfix_string};
//!
//! let postfix = to_postfix_string(&convert("10 / (2 + 3)"));
//! assert_eq!(postfix, "10 2 3 + /");
//!
//! let result = evaluate(&postfix).unwrap();
//! assert_eq!(result.value, 2.0);
//! assert_eq!(result.steps[3].description, "Pop 3 and 2, compute 2 + 3 = 5");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for evaluation and conversion.
///
/// Evaluation failures are deterministic input errors: each aborts the
/// evaluation at the token where it was detected and carries enough context
/// for a message. Conversion only fails in strict mode.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Produces a user-facing message for every failure through `Display`.
pub mod error;
/// Ties together tokenizing, postfix evaluation and infix conversion.
///
/// # Responsibilities
/// - Tokenizes infix and postfix sources.
/// - Evaluates postfix with step recording.
/// - Converts infix to postfix.
pub mod interpreter;
/// Caller-owned state for interactive front ends: the latest evaluation, a
/// step playback cursor and user notices.
pub mod session;
/// Number formatting helpers shared by step descriptions and front ends.
pub mod util;

pub use error::{ErrorKind, ParseError, RuntimeError};
pub use interpreter::{
    converter::{ConvertOptions, Converter, convert, to_postfix_string},
    evaluator::{EvaluationResult, StepKind, StepRecord, evaluate},
    lexer::Token,
    operator::{Associativity, Operator},
};
pub use session::{Notice, Progress, Session, Severity};

/// Converts an infix expression with `options` and evaluates the resulting
/// postfix.
///
/// # Errors
/// Returns the conversion error in strict mode, or any evaluation error of
/// the produced postfix.
///
/// # Examples
/// ```
/// use stackviz::{Associativity, ConvertOptions, evaluate_infix};
///
/// let left = evaluate_infix("2 ^ 3 ^ 2", ConvertOptions::default()).unwrap();
/// assert_eq!(left.value, 64.0);
///
/// let right = ConvertOptions::default().with_power(Associativity::Right);
/// assert_eq!(evaluate_infix("2 ^ 3 ^ 2", right).unwrap().value, 512.0);
///
/// assert!(evaluate_infix("1 / 0", ConvertOptions::default()).is_err());
/// ```
pub fn evaluate_infix(expression: &str,
                      options: ConvertOptions)
                      -> Result<EvaluationResult, Box<dyn std::error::Error>> {
    let tokens = Converter::new(options).convert(expression)?;
    Ok(evaluate(&to_postfix_string(&tokens))?)
}
