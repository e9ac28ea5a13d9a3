use stackviz::{Associativity, ConvertOptions, Session, Severity, StepKind};

#[test]
fn evaluate_then_play_every_step() {
    let mut session = Session::new();

    let notice = session.evaluate("2 3 +");
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.text, "Expression evaluated successfully!");
    assert_eq!(session.result().map(|r| r.value), Some(5.0));
    assert!(session.stack().is_empty());
    assert!(session.current_step().is_none());

    assert_eq!(session.step(), None);
    assert_eq!(session.stack(), [2.0]);
    assert_eq!(session.current_step().map(|s| s.index), Some(1));

    assert_eq!(session.step(), None);
    assert_eq!(session.stack(), [2.0, 3.0]);

    assert_eq!(session.step(), None);
    assert_eq!(session.stack(), [5.0]);
    assert_eq!(session.current_step().map(|s| s.kind), Some(StepKind::Operation));
    assert!(session.progress().is_complete());

    let done = session.step().expect("playback should be finished");
    assert_eq!(done.text, "All steps completed!");
    assert_eq!(session.stack(), [5.0]);
}

#[test]
fn progress_tracks_the_cursor() {
    let mut session = Session::new();
    session.evaluate("1 2 + 3 *");

    let progress = session.progress();
    assert_eq!((progress.played, progress.total), (0, 5));
    assert_eq!(progress.percent, 0.0);

    session.step();
    session.step();
    assert_eq!(session.progress().played, 2);
    assert_eq!(session.progress().percent, 40.0);
}

#[test]
fn failed_evaluation_discards_previous_result() {
    let mut session = Session::new();
    session.evaluate("4 2 /");
    session.step();

    let notice = session.evaluate("4 0 /");
    assert!(notice.is_error());
    assert_eq!(notice.text, "Division by zero");
    assert!(session.result().is_none());
    assert!(session.steps().is_empty());
    assert!(session.stack().is_empty());
    assert!(session.current_step().is_none());
    assert_eq!(session.expression(), "4 0 /");
}

#[test]
fn blank_input_is_rejected_without_clearing() {
    let mut session = Session::new();
    session.evaluate("1 1 +");

    let notice = session.evaluate("   ");
    assert!(notice.is_error());
    assert_eq!(notice.text, "Please enter a postfix expression");
    assert!(session.result().is_some());

    let notice = session.convert("");
    assert_eq!(notice.text, "Please enter an infix expression");
    assert!(session.postfix().is_none());
}

#[test]
fn evaluating_again_restarts_playback() {
    let mut session = Session::new();
    session.evaluate("1 2 +");
    session.step();
    session.step();

    session.evaluate("7");
    assert!(session.current_step().is_none());
    assert!(session.stack().is_empty());
    assert_eq!(session.steps().len(), 1);
}

#[test]
fn conversion_feeds_the_evaluator() {
    let mut session = Session::new();

    let notice = session.convert("5 * (3 + 2)");
    assert_eq!(notice.text, "Converted to postfix!");
    assert_eq!(session.infix(), "5 * (3 + 2)");
    assert_eq!(session.postfix(), Some("5 3 2 + *"));
    assert_eq!(session.expression(), "5 3 2 + *");

    let expression = session.expression().to_string();
    session.evaluate(&expression);
    assert_eq!(session.result().map(|r| r.value), Some(25.0));
}

#[test]
fn strict_session_reports_conversion_errors() {
    let mut session = Session::with_options(ConvertOptions::strict());

    let notice = session.convert("(1 + 2");
    assert!(notice.is_error());
    assert!(notice.text.starts_with("Invalid infix expression"));
    assert!(session.postfix().is_none());

    let mut lenient = Session::new();
    assert!(!lenient.convert("(1 + 2").is_error());
    assert_eq!(lenient.postfix(), Some("1 2 + ("));
}

#[test]
fn options_survive_reset() {
    let options = ConvertOptions::default().with_power(Associativity::Right);
    let mut session = Session::with_options(options);
    session.convert("2 ^ 3 ^ 2");
    session.evaluate("1 2 +");

    let notice = session.reset();
    assert_eq!(notice.text, "Reset complete");
    assert_eq!(session.expression(), "");
    assert_eq!(session.infix(), "");
    assert!(session.postfix().is_none());
    assert!(session.result().is_none());

    session.convert("2 ^ 3 ^ 2");
    assert_eq!(session.postfix(), Some("2 3 2 ^ ^"));
}

#[test]
fn stepping_with_nothing_evaluated() {
    let mut session = Session::new();
    let notice = session.step().expect("nothing to play");
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(session.progress().total, 0);
    assert_eq!(session.progress().percent, 0.0);
}
