//! Fatal syntax errors.

#![allow(clippy::unwrap_used)]

use li_ir::{Dialect, Span};
use pretty_assertions::assert_eq;

use crate::{parse, parse_one, ParseError, ParseErrorKind};

fn error(source: &str) -> ParseError {
    match parse(source) {
        Ok(program) => panic!("expected an error, parsed {program:?}"),
        Err(e) => e,
    }
}

fn kind(source: &str) -> ParseErrorKind {
    error(source).kind
}

#[test]
fn unclosed_paren_points_at_opener() {
    let err = error("main: def() { (print (+ 1 2) }");
    assert_eq!(err.kind, ParseErrorKind::UnclosedParen);
    assert_eq!(err.span, Span::new(14, 15));
    assert_eq!(err.to_string(), "no closing parenthesis");
}

#[test]
fn block_opener_is_required() {
    assert_eq!(kind("f: def(x) x"), ParseErrorKind::MissingBlock);
    assert_eq!(kind("main: def() { if x (print 1) }"), ParseErrorKind::MissingBlock);
    assert_eq!(
        error("f: def() { if x { 1 } else 2 }").to_string(),
        "code block must begin with \"{\""
    );
}

#[test]
fn unterminated_literals() {
    assert_eq!(kind("s: \"abc"), ParseErrorKind::UnterminatedString);
    assert_eq!(kind("xs: [1 2"), ParseErrorKind::UnterminatedList);
    assert_eq!(kind("m: {a: 1"), ParseErrorKind::UnterminatedMap);
    assert_eq!(kind("f: def() { 1"), ParseErrorKind::UnterminatedBlock);
}

#[test]
fn literal_cannot_escape_its_call() {
    assert_eq!(kind("x: (f [1 2)"), ParseErrorKind::UnterminatedList);
}

#[test]
fn stray_closer() {
    let err = error("x: 1 }");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedCloser('}'));
    assert_eq!(err.span, Span::new(5, 6));
}

#[test]
fn top_level_must_bind() {
    assert_eq!(kind("(print 1)"), ParseErrorKind::TopLevelNotBinding("call"));
    assert_eq!(kind("x: 1 42"), ParseErrorKind::TopLevelNotBinding("number"));
}

#[test]
fn map_entries_must_bind() {
    assert_eq!(
        kind("m: {a: 1 2}"),
        ParseErrorKind::MapEntryNotBinding("number")
    );
}

#[test]
fn empty_call() {
    assert_eq!(kind("x: ()"), ParseErrorKind::EmptyCall);
}

#[test]
fn binding_needs_a_name() {
    assert_eq!(kind(": 1"), ParseErrorKind::MissingBindingName);
    assert_eq!(kind("f: def() { x : 1 }"), ParseErrorKind::MissingBindingName);
}

#[test]
fn token_glued_to_literal() {
    assert_eq!(
        kind("x: f\"s\""),
        ParseErrorKind::UnexpectedOpener {
            token: "f".into(),
            opener: '"',
        }
    );
    assert_eq!(
        kind("x: xs[0]"),
        ParseErrorKind::UnexpectedOpener {
            token: "xs".into(),
            opener: '[',
        }
    );
}

#[test]
fn condition_problems() {
    assert_eq!(kind("f: def() { if { 1 } }"), ParseErrorKind::MissingCondition);
    assert_eq!(
        kind("f: def() { if a b { 1 } }"),
        ParseErrorKind::TrailingCondition
    );
}

#[test]
fn parameters_must_be_names() {
    assert_eq!(
        kind("f: def(a \"b\") { a }"),
        ParseErrorKind::InvalidParameter("\"".into())
    );
    assert_eq!(
        kind("f: def(a (b)) { a }"),
        ParseErrorKind::InvalidParameter("(".into())
    );
}

#[test]
fn parse_one_on_empty_input() {
    let err = parse_one("   ", Dialect::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
}

#[test]
fn hints_for_common_mistakes() {
    assert!(error("x: (f").hint().is_some());
    assert!(error("x: 1 }").hint().is_none());
}
