//! Language-level tests: parse Li source, run `main`, inspect the result
//! and captured output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod catalog_tests;
mod control_tests;
mod error_tests;
mod program_tests;

use li_ir::Dialect;

use crate::{buffer_handler, EvalResult, Interpreter, Value};

/// Run `source` in the given dialect; returns `main`'s result and the output.
fn run_in(dialect: Dialect, source: &str) -> (EvalResult, String) {
    let program = li_parse::parse_with_dialect(source, dialect).expect("test program parses");
    let handler = buffer_handler();
    let mut interp = Interpreter::builder()
        .dialect(dialect)
        .print_handler(handler.clone())
        .build();
    let result = interp.run_program(&program);
    (result, handler.get_output())
}

fn run(source: &str) -> (EvalResult, String) {
    run_in(Dialect::english(), source)
}

/// `main`'s value, failing the test on any error.
fn main_value(source: &str) -> Value {
    run(source).0.expect("program runs")
}

fn output(source: &str) -> String {
    let (result, out) = run(source);
    result.expect("program runs");
    out
}

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::int).collect())
}
