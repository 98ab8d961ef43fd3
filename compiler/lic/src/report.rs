//! Terminal rendering of errors.
//!
//! Parse errors point into the source and are drawn as `ariadne` snippets.
//! Runtime errors carry no position; they print as one `error:` line with
//! the call chain that raised them.

use std::io::IsTerminal as _;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use li_eval::EvalError;
use li_parse::ParseError;

/// Draw `err` against `source` as a snippet.
pub fn render_parse_error(path: &str, source: &str, err: &ParseError, color: bool) -> String {
    let range = label_range(err.span.to_range(), source.len());
    let mut report = Report::build(ReportKind::Error, path, range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message("syntax error")
        .with_label(Label::new((path, range)).with_message(err.to_string()));
    if let Some(hint) = err.hint() {
        report = report.with_help(hint);
    }

    let mut out = Vec::new();
    if report
        .finish()
        .write((path, Source::from(source)), &mut out)
        .is_err()
    {
        return format!("error: {path}: {err}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Print a parse error to stderr, colored when stderr is a terminal.
pub fn eprint_parse_error(path: &str, source: &str, err: &ParseError) {
    let color = std::io::stderr().is_terminal();
    eprint!("{}", render_parse_error(path, source, err, color));
}

/// Point spans are widened to one byte so the label has something to mark.
fn label_range(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    if start == end && end < len {
        start..end + 1
    } else {
        start..end
    }
}

/// `error: <chain>: <cause>` with the file that was running.
pub fn render_eval_error(path: &str, err: &EvalError) -> String {
    format!("error: {err}\n  --> {path}")
}
