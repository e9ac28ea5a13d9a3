/// The converter module rewrites infix expressions as postfix.
///
/// It implements the shunting-yard algorithm with an explicit operator stack
/// and the static precedence table. By default malformed input degrades
/// silently; a strict mode reports it instead.
///
/// # Responsibilities
/// - Orders operands and operators by precedence and parentheses.
/// - Emits the postfix token sequence, leaving formatting to the caller.
pub mod converter;
/// The evaluator module runs postfix expressions on an operand stack.
///
/// Every token becomes one recorded step carrying a copy of the stack, so a
/// front end can replay the evaluation afterwards.
///
/// # Responsibilities
/// - Pushes numbers and applies operators to the top two values.
/// - Records a step per token with a description and a stack snapshot.
/// - Reports invalid tokens, missing operands, leftover values and division
///   by zero.
pub mod evaluator;
/// The lexer module splits source text into tokens.
///
/// Infix text is scanned with a `logos` lexer that recognizes numbers, the
/// six operators and parentheses. Postfix text is split on whitespace and
/// each word classified on its own.
pub mod lexer;
/// The operator module defines the supported binary operators, their
/// symbols and their precedence.
pub mod operator;
