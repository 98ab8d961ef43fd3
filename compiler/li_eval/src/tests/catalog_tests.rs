use pretty_assertions::assert_eq;

use super::{ints, main_value, output, run, run_in};
use crate::{EvalError, Value};
use li_ir::Dialect;

#[test]
fn chained_comparisons_in_source() {
    let src = "main: def() { [(< 1 2 3) (< 1 3 2) (= 1 1 1) (= 1 1 2) (! 1 2)] }";
    assert_eq!(
        main_value(src),
        Value::list(vec![
            Value::bool(true),
            Value::bool(false),
            Value::bool(true),
            Value::bool(false),
            Value::bool(true),
        ])
    );
}

#[test]
fn sequence_primitives_mutate_in_place() {
    let src = "
        main: def() {
          lst: [1 2 3]
          (ins lst 1 9)
          removed: (del lst 0)
          parts: (cut lst 1)
          [lst removed parts]
        }
    ";
    assert_eq!(
        main_value(src),
        Value::list(vec![
            ints(&[9, 2, 3]),
            Value::int(1),
            Value::list(vec![ints(&[9]), ints(&[2, 3])]),
        ])
    );
}

#[test]
fn higher_order_primitives_take_functions_and_builtins() {
    let src = r#"
        main: def() {
          [
            (map def(x) { (* x x) } [1 2 3])
            (fold + [1 2 3 4])
            (filter def(x) { (> x 1) } [0 1 2 3])
            (filter def(c) { (! c "a") } "banana")
            (map def(k) { k } {x: 1 y: 2})
          ]
        }
    "#;
    assert_eq!(
        main_value(src),
        Value::list(vec![
            ints(&[1, 4, 9]),
            Value::int(10),
            ints(&[2, 3]),
            Value::string("bnn"),
            Value::list(vec![Value::string("x"), Value::string("y")]),
        ])
    );
}

#[test]
fn printing_renders_values() {
    let src = r#"
        main: def() {
          (println 1 2.0 "s" ["s" 1] {a: [null]} (/ 1 4))
          (print "no" "gap")
          (print "\n")
        }
    "#;
    assert_eq!(
        output(src),
        "1\n2.0\ns\n[\"s\", 1]\n{a: [null]}\n0.25\nnogap\n"
    );
}

#[test]
fn assert_reports_and_continues() {
    let src = r#"
        main: def() {
          (assert (+ 1 1) 2)
          (assert "a" "b")
          (println "still running")
        }
    "#;
    assert_eq!(output(src), "Assert failed: a b\nstill running\n");
}

#[test]
fn type_and_round() {
    let src = r#"main: def() { [(type 1) (type "s") (type def() {}) (round 2.5) (round 2.6)] }"#;
    assert_eq!(
        main_value(src),
        Value::list(vec![
            Value::string("number"),
            Value::string("string"),
            Value::string("function"),
            Value::int(2),
            Value::int(3),
        ])
    );
}

#[test]
fn import_adds_reserved_primitives() {
    assert_eq!(
        main_value(r#"main: def() { (import "time") (wait 0) }"#),
        Value::Null
    );
    let (result, _) = run(r#"main: def() { (import "time") wait: 1 }"#);
    assert_eq!(
        result.unwrap_err().root_cause(),
        &EvalError::ReservedWord("wait".into())
    );
}

#[test]
fn unknown_extension_fails() {
    let (result, _) = run(r#"main: def() { (import "gpio") }"#);
    let err = result.unwrap_err();
    assert_eq!(err.call_chain(), vec!["main", "import"]);
    assert_eq!(err.root_cause(), &EvalError::UnknownExtension("gpio".into()));
}

#[test]
fn french_dialect_uses_its_own_names() {
    let src = r#"
        carre: fonc(x) { (* x x) }
        main: fonc() {
          n: 3
          tantque n { (affiche n) n: (- n 1) }
          (affiche_xa "" carre(4) (taille [1 2]))
          (import "time")
          (attends 0)
        }
    "#;
    let (result, out) = run_in(Dialect::french(), src);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(out, "321\n16\n2\n");
}

#[test]
fn english_names_are_unbound_in_french() {
    let (result, _) = run_in(Dialect::french(), "main: fonc() { (print 1) }");
    assert_eq!(
        result.unwrap_err().root_cause(),
        &EvalError::UnboundVariable("print".into())
    );
}
