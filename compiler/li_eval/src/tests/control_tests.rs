use pretty_assertions::assert_eq;

use super::{main_value, output};
use crate::Value;

const CLASSIFY: &str = r#"
    classify: def(x) {
      if (< x 0) { "neg" } elif (= x 0) { "zero" } else { "pos" }
    }
"#;

#[test]
fn exactly_one_branch_runs() {
    let src = format!("{CLASSIFY} main: def() {{ [classify(-1) classify(0) classify(5)] }}");
    assert_eq!(
        main_value(&src),
        Value::list(vec![
            Value::string("neg"),
            Value::string("zero"),
            Value::string("pos")
        ])
    );
}

#[test]
fn branch_conditions_stop_at_the_first_truthy_one() {
    let src = r#"
        main: def() {
          if (println "first") { 1 } elif (println "second") { 2 } elif 1 { 3 } elif (println "never") { 4 }
        }
    "#;
    let (result, out) = super::run(src);
    assert_eq!(result, Ok(Value::int(3)));
    assert_eq!(out, "first\nsecond\n");
}

#[test]
fn no_match_without_else_is_null() {
    assert_eq!(main_value("main: def() { if 0 { 1 } }"), Value::Null);
}

#[test]
fn else_and_elif_bind_after_a_conditional() {
    let src = "main: def() { if 0 { 1 }\n else: 5\n elif: 2\n (+ else elif) }";
    assert_eq!(main_value(src), Value::int(7));
}

#[test]
fn else_binds_after_a_loop() {
    assert_eq!(main_value("main: def() { while 0 { 1 } else: 3 else }"), Value::int(3));
}

#[test]
fn truthiness_of_values() {
    let src = r#"
        t: def(v) { if v { 1 } else { 0 } }
        main: def() {
          [t(null) t(0) t(0.0) t("") t([]) t({}) t(2) t("a") t([0]) t(+)]
        }
    "#;
    assert_eq!(main_value(src), super::ints(&[0, 0, 0, 0, 0, 0, 1, 1, 1, 1]));
}

#[test]
fn loop_runs_while_condition_holds() {
    let src = "
        main: def() {
          i: 0 total: 0
          while (< i 5) { total: (+ total i) i: (+ i 1) }
          total
        }
    ";
    assert_eq!(main_value(src), Value::int(10));
}

#[test]
fn loop_with_false_condition_falls_through_to_else() {
    let src = r#"
        main: def() {
          while 0 { (println "body") } else { (println "else") "done" }
        }
    "#;
    let (result, out) = super::run(src);
    assert_eq!(result, Ok(Value::string("done")));
    assert_eq!(out, "else\n");
}

#[test]
fn loop_else_runs_once_after_iterations() {
    let src = r#"
        main: def() {
          n: 3
          while n { (print n) n: (- n 1) } else { (println "!") }
        }
    "#;
    assert_eq!(output(src), "321!\n");
}

#[test]
fn loop_without_else_is_null() {
    assert_eq!(main_value("main: def() { while 0 { 1 } }"), Value::Null);
}

#[test]
fn branch_bodies_run_in_order() {
    let src = r#"
        main: def() {
          if 1 { (print "a") (print "b") (println "c") }
        }
    "#;
    assert_eq!(output(src), "abc\n");
}
