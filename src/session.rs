use tracing::{debug, info};

use crate::interpreter::{
    converter::{ConvertOptions, Converter, to_postfix_string},
    evaluator::{EvaluationResult, StepRecord, evaluate},
};

/// How a [`Notice`] should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The action worked.
    Success,
    /// The action failed; the text says why.
    Error,
}

/// A short message for the user, produced by every session action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message itself.
    pub text:     String,
    /// Whether it reports success or failure.
    pub severity: Severity,
}

impl Notice {
    /// A success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self { text:     text.into(),
               severity: Severity::Success, }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self { text:     text.into(),
               severity: Severity::Error, }
    }

    /// Whether this notice reports an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

/// How far step playback has advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Number of steps played so far.
    pub played:  usize,
    /// Number of recorded steps.
    pub total:   usize,
    /// `played / total` as a percentage, `0` when there are no steps.
    pub percent: f64,
}

impl Progress {
    /// Whether every recorded step has been played.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.played >= self.total
    }
}

/// Caller-owned state for an interactive front end.
///
/// Holds the expressions last entered, the latest evaluation and a cursor
/// for replaying its steps one at a time. The evaluator and converter stay
/// stateless; only this struct changes between actions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    expression: String,
    infix:      String,
    postfix:    Option<String>,
    result:     Option<EvaluationResult>,
    cursor:     Option<usize>,
    stack:      Vec<f64>,
    converter:  Converter,
}

impl Session {
    /// Creates an empty session with lenient conversion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session converting with the given options.
    #[must_use]
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { converter: Converter::new(options),
               ..Self::default() }
    }

    /// Evaluates a postfix expression and replaces the current result.
    ///
    /// On success playback restarts before the first step with an empty
    /// stack. On failure every previous result is discarded.
    pub fn evaluate(&mut self, input: &str) -> Notice {
        self.expression = input.to_string();

        if input.trim().is_empty() {
            return Notice::error("Please enter a postfix expression");
        }

        self.cursor = None;
        self.stack.clear();

        match evaluate(input) {
            Ok(result) => {
                info!(value = result.value, steps = result.steps.len(), "expression evaluated");
                self.result = Some(result);
                Notice::success("Expression evaluated successfully!")
            },
            Err(e) => {
                debug!(error = %e, "evaluation failed");
                self.result = None;
                Notice::error(e.to_string())
            },
        }
    }

    /// Converts an infix expression and makes the postfix form the current
    /// expression, ready to be evaluated.
    pub fn convert(&mut self, input: &str) -> Notice {
        self.infix = input.to_string();

        if input.trim().is_empty() {
            return Notice::error("Please enter an infix expression");
        }

        match self.converter.convert(input) {
            Ok(tokens) => {
                let postfix = to_postfix_string(&tokens);
                info!(infix = input, postfix = %postfix, "expression converted");
                self.expression.clone_from(&postfix);
                self.postfix = Some(postfix);
                Notice::success("Converted to postfix!")
            },
            Err(e) => {
                debug!(error = %e, "conversion failed");
                Notice::error(format!("Invalid infix expression: {e}"))
            },
        }
    }

    /// Plays the next recorded step, making its snapshot the displayed
    /// stack.
    ///
    /// Returns a notice only when there is nothing left to play.
    pub fn step(&mut self) -> Option<Notice> {
        let next = self.cursor.map_or(0, |c| c + 1);

        let Some(snapshot) = self.steps().get(next).map(|step| step.stack.clone()) else {
            return Some(Notice::success("All steps completed!"));
        };

        self.stack = snapshot;
        self.cursor = Some(next);
        None
    }

    /// Clears everything back to a fresh session. Conversion options are
    /// kept.
    pub fn reset(&mut self) -> Notice {
        *self = Self { converter: self.converter,
                       ..Self::default() };
        Notice::success("Reset complete")
    }

    /// The current postfix expression: the last one evaluated or produced
    /// by a conversion.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The last infix expression entered.
    #[must_use]
    pub fn infix(&self) -> &str {
        &self.infix
    }

    /// The postfix text produced by the last successful conversion.
    #[must_use]
    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// The latest successful evaluation.
    #[must_use]
    pub const fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Recorded steps of the latest evaluation.
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        self.result.as_ref().map(|r| r.steps.as_slice()).unwrap_or_default()
    }

    /// The step most recently played, if any.
    #[must_use]
    pub fn current_step(&self) -> Option<&StepRecord> {
        self.cursor.and_then(|c| self.steps().get(c))
    }

    /// The stack as of the step most recently played.
    #[must_use]
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// Playback progress through the recorded steps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Progress {
        let total = self.steps().len();
        let played = self.cursor.map_or(0, |c| c + 1);
        let percent = if total == 0 {
            0.0
        } else {
            played as f64 * 100.0 / total as f64
        };
        Progress { played, total, percent }
    }
}
