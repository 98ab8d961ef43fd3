use pretty_assertions::assert_eq;

use super::{main_value, run};
use crate::{Env, EvalError, Interpreter, Value};

#[test]
fn main_result_is_returned() {
    assert_eq!(main_value("main: def() { (+ 1 2 3) }"), Value::int(6));
}

#[test]
fn empty_main_returns_null() {
    assert_eq!(main_value("main: def() {}"), Value::Null);
}

#[test]
fn missing_main_is_unbound() {
    let (result, _) = run("helper: def() { 1 }");
    assert_eq!(result, Err(EvalError::UnboundVariable("main".into())));
}

#[test]
fn main_must_be_a_function() {
    let (result, _) = run("main: 5");
    assert_eq!(result, Err(EvalError::Syntax("not callable: number".into())));
}

#[test]
fn top_level_functions_see_each_other() {
    let src = "
        double: def(x) { (* x 2) }
        quad: def(x) { double(double(x)) }
        main: def() { quad(3) }
    ";
    assert_eq!(main_value(src), Value::int(12));
}

#[test]
fn top_level_values_cannot_see_siblings() {
    let program = li_parse::parse("a: 1 b: a").unwrap();
    let mut interp = Interpreter::new();
    let globals = Env::root();
    assert_eq!(
        interp.load_program(&program, &globals),
        Err(EvalError::UnboundVariable("a".into()))
    );
}

#[test]
fn binding_a_primitive_name_is_rejected_before_anything_binds() {
    let program = li_parse::parse("a: 1 +: 2").unwrap();
    let mut interp = Interpreter::new();
    let globals = Env::root();
    assert_eq!(
        interp.load_program(&program, &globals),
        Err(EvalError::ReservedWord("+".into()))
    );
    assert!(globals.is_empty());
}

#[test]
fn structural_keywords_are_reserved() {
    for (src, word) in [
        ("lit: 1", "lit"),
        ("params: 1", "params"),
        ("main: def() { if: 1 }", "if"),
        ("main: def() { while: 1 }", "while"),
    ] {
        let (result, _) = run(src);
        assert_eq!(
            result.unwrap_err().root_cause(),
            &EvalError::ReservedWord(word.into()),
            "{src}"
        );
    }
}

#[test]
fn reserved_parameter_names_are_rejected() {
    let (result, _) = run("f: def(len) { len } main: def() { f(1) }");
    assert_eq!(result, Err(EvalError::ReservedWord("len".into())));
}

#[test]
fn bindings_return_their_value_and_mutate_the_scope() {
    let src = "main: def() { y: x: 4 (+ x y) }";
    assert_eq!(main_value(src), Value::int(8));
}

#[test]
fn primitive_names_evaluate_to_themselves() {
    let src = "
        add: +
        main: def() { [(add 1 2) (type add) add] }
    ";
    assert_eq!(
        main_value(src),
        Value::list(vec![Value::int(3), Value::string("builtin"), Value::builtin("+")])
    );
}

#[test]
fn list_elements_are_evaluated_once() {
    let src = r#"
        main: def() {
          xs: [(println "built") 2]
          (xs 1) (xs 1)
        }
    "#;
    let (result, out) = run(src);
    assert_eq!(result, Ok(Value::int(2)));
    assert_eq!(out, "built\n");
}

#[test]
fn indexing_reads_and_writes() {
    let src = "
        main: def() {
          xs: [1 2 3]
          (xs 1 20)
          [(xs 1) (xs -1) (\"abc\" 2)]
        }
    ";
    assert_eq!(
        main_value(src),
        Value::list(vec![Value::int(20), Value::int(3), Value::string("c")])
    );
}
