//! Parse errors.
//!
//! Every parse error is fatal: the parser stops at the first one and returns
//! no partial program.

use li_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("no closing parenthesis")]
    UnclosedParen,
    #[error("code block must begin with \"{{\"")]
    MissingBlock,
    #[error("unterminated block")]
    UnterminatedBlock,
    #[error("unterminated list")]
    UnterminatedList,
    #[error("unterminated map")]
    UnterminatedMap,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unexpected `{0}`")]
    UnexpectedCloser(char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("binding has no name before `:`")]
    MissingBindingName,
    #[error("expected a `name: value` binding at top level, found {0}")]
    TopLevelNotBinding(&'static str),
    #[error("map entries must be `key: value` bindings, found {0}")]
    MapEntryNotBinding(&'static str),
    #[error("empty call `()`")]
    EmptyCall,
    #[error("`{token}` cannot be directly followed by `{opener}`")]
    UnexpectedOpener { token: String, opener: char },
    #[error("missing condition")]
    MissingCondition,
    #[error("condition has trailing tokens before its block")]
    TrailingCondition,
    #[error("invalid parameter name `{0}`")]
    InvalidParameter(String),
}

/// A fatal syntax error with the byte range it points at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, range: std::ops::Range<usize>) -> Self {
        ParseError {
            kind,
            span: Span::saturating(range),
        }
    }

    /// Suggestion shown under the snippet, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match &self.kind {
            ParseErrorKind::UnclosedParen => Some("add the matching `)`"),
            ParseErrorKind::MissingBlock => {
                Some("conditions, loops and functions need a `{ ... }` body")
            }
            ParseErrorKind::UnexpectedOpener { .. } => {
                Some("separate the token from the literal with a space")
            }
            ParseErrorKind::TopLevelNotBinding(_) => {
                Some("a program is a series of `name: value` bindings, such as `main: def() { ... }`")
            }
            ParseErrorKind::EmptyCall => Some("a call needs a head, such as `(f x)`"),
            _ => None,
        }
    }
}
