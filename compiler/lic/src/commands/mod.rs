//! Command implementations for the `li` binary.
//!
//! Each command reports its own errors and returns whether it succeeded;
//! `main` turns that into the exit status.

mod parse;
mod run;

pub use parse::{parse_file, parse_to_json};
pub use run::{run_files, run_source};

use li_eval::EvalError;
use li_parse::ParseError;

/// Why a source file did not run.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a source file, reporting failure on stderr.
fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            None
        }
    }
}

/// Report `failure` for `path` on stderr.
fn report(path: &str, source: &str, failure: &Failure) {
    match failure {
        Failure::Parse(err) => crate::report::eprint_parse_error(path, source, err),
        Failure::Eval(err) => eprintln!("{}", crate::report::render_eval_error(path, err)),
        Failure::Json(err) => eprintln!("error: {path}: {err}"),
    }
}
