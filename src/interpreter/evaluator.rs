/// Core postfix evaluation.
///
/// Walks the postfix tokens with an operand stack, records one step per token
/// and produces the final value.
pub mod core;

/// Binary arithmetic.
///
/// Applies one of the six operators to two operands, checking for division by
/// zero.
pub mod binary;

pub use self::core::{EvalResult, EvaluationResult, StepKind, StepRecord, evaluate};
