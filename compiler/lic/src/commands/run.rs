//! `li run`: evaluate source files.

use li_eval::{Interpreter, Value};
use tracing::debug;

use super::{read_file, report, Failure};
use crate::options::{banner, Options};

/// Parse `source` in the interpreter's dialect and run its `main`.
pub fn run_source(interp: &mut Interpreter, source: &str) -> Result<Value, Failure> {
    let program = li_parse::parse_with_dialect(source, *interp.dialect())?;
    Ok(interp.run_program(&program)?)
}

/// Run each file in order with one interpreter, stopping at the first
/// failure. Imports made by one file stay available to the next; globals
/// do not.
pub fn run_files(paths: &[String], options: &Options) -> bool {
    if options.banner {
        println!("{}", banner(&options.dialect));
    }
    let mut interp = Interpreter::builder().dialect(options.dialect).build();

    for path in paths {
        let Some(source) = read_file(path) else {
            return false;
        };
        debug!(path = path.as_str(), bytes = source.len(), "running");
        if let Err(failure) = run_source(&mut interp, &source) {
            report(path, &source, &failure);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use li_eval::{buffer_handler, EvalError};
    use li_ir::Dialect;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn run_source_returns_main_value() {
        let mut interp = Interpreter::builder().print_handler(buffer_handler()).build();
        let value = run_source(&mut interp, "main: def() { (* 6 7) }").unwrap();
        assert_eq!(value, Value::int(42));
    }

    #[test]
    fn failures_keep_their_kind() {
        let mut interp = Interpreter::builder().print_handler(buffer_handler()).build();
        assert!(matches!(
            run_source(&mut interp, "main: def( {"),
            Err(Failure::Parse(_))
        ));
        assert!(matches!(
            run_source(&mut interp, "main: def() { nope }"),
            Err(Failure::Eval(EvalError::FunctionCall { .. }))
        ));
    }

    #[test]
    fn imports_persist_across_sources() {
        let handler = buffer_handler();
        let mut interp = Interpreter::builder()
            .dialect(Dialect::french())
            .print_handler(handler.clone())
            .build();
        run_source(&mut interp, r#"main: fonc() { (import "time") }"#).unwrap();
        run_source(&mut interp, "main: fonc() { (attends 0) (affiche_xa 1) }").unwrap();
        assert_eq!(handler.get_output(), "1\n");
    }
}
