use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::binary::apply,
        lexer::{Token, split_postfix},
    },
    util::num::format_number,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or a `RuntimeError`
/// describing the first failure; there is no partial result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a recorded step did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// A number was pushed.
    Push,
    /// Two values were popped, combined, and the result pushed.
    Operation,
}

/// One recorded evaluation step.
///
/// `stack` is an owned copy taken right after the step, so it keeps
/// describing that moment no matter what happens to the live stack later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// 1-based step number, equal to the index of the token it consumed.
    pub index:       usize,
    /// The token consumed by this step.
    pub token:       Token,
    /// The token exactly as written in the source.
    pub lexeme:      String,
    /// Human readable account of the action.
    pub description: String,
    /// Stack contents after the step, bottom first.
    pub stack:       Vec<f64>,
    /// Whether the step pushed a number or applied an operator.
    pub kind:        StepKind,
}

/// The value of a postfix expression along with the trace that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// The single value left on the stack.
    pub value: f64,
    /// One step per token, in source order.
    pub steps: Vec<StepRecord>,
}

/// Evaluates a whitespace-delimited postfix expression.
///
/// Each call starts from an empty operand stack. Numbers are pushed;
/// operators pop `b` (the top) then `a`, push `a op b`, and are recorded
/// with the stack as it stands after the push.
///
/// # Errors
/// - `InvalidToken` if a token is neither an operator nor a number.
/// - `InsufficientOperands` if an operator finds fewer than two values.
/// - `DivisionByZero` if `/` has a zero right operand.
/// - `MalformedResult` if the stack does not end with exactly one value,
///   including the empty expression.
///
/// # Example
/// ```
/// use stackviz::{StepKind, evaluate};
///
/// let result = evaluate("2 3 +").unwrap();
/// assert_eq!(result.value, 5.0);
/// assert_eq!(result.steps.len(), 3);
/// assert_eq!(result.steps[2].kind, StepKind::Operation);
/// assert_eq!(result.steps[2].stack, vec![5.0]);
///
/// assert!(evaluate("2 +").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<EvaluationResult> {
    trace!(expression, "evaluating postfix expression");

    let mut stack: Vec<f64> = Vec::new();
    let mut steps = Vec::new();

    for (position, word) in (1..).zip(split_postfix(expression)) {
        let Some(token) = Token::classify(word) else {
            trace!(position, token = word, "token is neither an operator nor a number");
            return Err(RuntimeError::InvalidToken { token: word.to_string(),
                                                    position });
        };

        let (description, kind) = match token {
            Token::Operator(op) => {
                let &[.., a, b] = stack.as_slice() else {
                    trace!(position, %op, depth = stack.len(), "operator without two operands");
                    return Err(RuntimeError::InsufficientOperands { operator: op,
                                                                    position });
                };
                stack.truncate(stack.len() - 2);

                let value = apply(op, a, b, position).inspect_err(|e| {
                                                         trace!(position, %op, error = %e, "operation failed");
                                                     })?;
                stack.push(value);

                let (a, b, value) = (format_number(a), format_number(b), format_number(value));
                (format!("Pop {b} and {a}, compute {a} {op} {b} = {value}"), StepKind::Operation)
            },
            Token::Number(value) => {
                stack.push(value);
                (format!("Push {word}"), StepKind::Push)
            },
            Token::LParen | Token::RParen => {
                trace!(position, token = word, "parenthesis in postfix input");
                return Err(RuntimeError::InvalidToken { token: word.to_string(),
                                                        position });
            },
        };

        debug!(step = position, token = word, stack = ?stack, "{description}");

        steps.push(StepRecord { index: position,
                                token,
                                lexeme: word.to_string(),
                                description,
                                stack: stack.clone(),
                                kind });
    }

    match stack.as_slice() {
        &[value] => Ok(EvaluationResult { value, steps }),
        rest => {
            trace!(remaining = rest.len(), "stack does not hold exactly one value");
            Err(RuntimeError::MalformedResult { remaining: rest.len() })
        },
    }
}
