use pretty_assertions::assert_eq;

use super::run;
use crate::EvalError;

fn failure(src: &str) -> EvalError {
    run(src).0.expect_err("program fails")
}

#[test]
fn errors_carry_the_call_chain() {
    let err = failure(
        r#"
        inner: def(x) { (+ x "a") }
        outer: def() { (inner 1) 0 }
        main: def() { outer() }
    "#,
    );
    assert_eq!(err.call_chain(), vec!["main", "outer", "inner", "+"]);
    assert_eq!(
        err.root_cause(),
        &EvalError::TypeMismatch {
            op: "+",
            expected: "number",
            found: "string"
        }
    );
    assert_eq!(
        err.to_string(),
        "main: outer: inner: +: type mismatch in +: expected number, found string"
    );
}

#[test]
fn trampolined_calls_report_once() {
    let err = failure(
        "
        countdown: def(n) { if (= n 0) { (/ 1 n) } else { countdown((- n 1)) } }
        main: def() { countdown(1000) }
    ",
    );
    assert_eq!(err.call_chain(), vec!["main", "countdown", "/"]);
    assert_eq!(err.root_cause(), &EvalError::DivisionByZero);
}

#[test]
fn missing_arguments_are_unbound_when_used() {
    let err = failure("f: def(a b) { b } main: def() { f(1) }");
    assert_eq!(err.call_chain(), vec!["main", "f"]);
    assert_eq!(err.root_cause(), &EvalError::UnboundVariable("b".into()));
}

#[test]
fn unused_missing_arguments_are_fine() {
    assert_eq!(
        super::main_value("f: def(a b) { a } main: def() { f(1) }"),
        crate::Value::int(1)
    );
}

#[test]
fn argument_errors_are_wrapped_with_the_callee_name() {
    let err = failure("main: def() { (println (len 5)) }");
    assert_eq!(err.call_chain(), vec!["main", "println", "len"]);
}

#[test]
fn calling_a_number_is_not_callable() {
    let err = failure("main: def() { (1 2) }");
    assert_eq!(err.root_cause(), &EvalError::Syntax("not callable: number".into()));
    assert_eq!(err.call_chain(), vec!["main", "1"]);
}

#[test]
fn unbound_names_are_reported() {
    let err = failure("main: def() { (print nope) }");
    assert_eq!(err.root_cause(), &EvalError::UnboundVariable("nope".into()));
}

#[test]
fn index_errors() {
    assert_eq!(
        failure("main: def() { ([1 2] 2) }").root_cause(),
        &EvalError::IndexOutOfBounds { index: 2, len: 2 }
    );
    assert_eq!(
        failure("main: def() { ({a: 1} \"b\") }").root_cause(),
        &EvalError::KeyNotFound("b".into())
    );
    assert!(matches!(
        failure("main: def() { ([1] 0 1 2) }").root_cause(),
        EvalError::ArityMismatch { name: "index", got: 3, .. }
    ));
}

#[test]
fn output_before_a_failure_is_kept() {
    let (result, out) = run(r#"main: def() { (println "before") (/ 1 0) (println "after") }"#);
    assert!(result.is_err());
    assert_eq!(out, "before\n");
}
