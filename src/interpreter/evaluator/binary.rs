use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
};

/// Computes `left op right` in floating-point arithmetic.
///
/// `/` is real division and fails when `right` is exactly zero (either sign).
/// `^` raises `left` to the power `right`. `%` is the remainder of `left`
/// divided by `right`, carrying the sign of `left`; a zero divisor yields NaN
/// rather than an error.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: The operand pushed first.
/// - `right`: The operand pushed last.
/// - `position`: Token index for error reporting.
///
/// # Example
/// ```
/// use stackviz::{Operator, error::RuntimeError, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(Operator::Pow, 2.0, 3.0, 1), Ok(8.0));
/// assert_eq!(apply(Operator::Mod, -7.0, 3.0, 1), Ok(-1.0));
/// assert_eq!(apply(Operator::Div, 5.0, 0.0, 3),
///            Err(RuntimeError::DivisionByZero { position: 3 }));
/// ```
pub fn apply(op: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    Ok(match op {
           Operator::Add => left + right,
           Operator::Sub => left - right,
           Operator::Mul => left * right,
           Operator::Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero { position });
               }
               left / right
           },
           Operator::Pow => left.powf(right),
           Operator::Mod => left % right,
       })
}
