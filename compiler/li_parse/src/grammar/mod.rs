//! Grammar productions, one file per construct.
//!
//! `parse_form` is the single scanning entry point; every production calls
//! back into it for nested forms.

mod call;
mod conditional;
mod literal;

use li_ir::Form;
use li_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one form starting after any separators.
    pub fn parse_form(&mut self) -> Result<Form, ParseError> {
        ensure_sufficient_stack(|| {
            self.cursor.skip_separators();
            let start = self.cursor.position();
            let form = self.parse_form_inner(start)?;
            tracing::trace!(kind = form.kind(), start, end = self.cursor.position(), "form");
            Ok(form)
        })
    }

    fn parse_form_inner(&mut self, start: usize) -> Result<Form, ParseError> {
        match self.cursor.peek() {
            None => Err(ParseError::new(ParseErrorKind::UnexpectedEnd, start..start)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_list(),
            Some(b'{') => self.parse_map(),
            Some(b'(') => self.parse_call(None),
            Some(c @ (b')' | b']' | b'}')) => Err(ParseError::new(
                ParseErrorKind::UnexpectedCloser(char::from(c)),
                start..start + 1,
            )),
            Some(b':') => Err(ParseError::new(
                ParseErrorKind::MissingBindingName,
                start..start + 1,
            )),
            Some(_) => self.parse_token(start),
        }
    }

    /// A bare token and whatever it introduces.
    fn parse_token(&mut self, start: usize) -> Result<Form, ParseError> {
        let token = self.cursor.eat_token();
        let end = self.cursor.position();
        let keywords = *self.dialect.keywords();

        match self.cursor.peek() {
            Some(b':') => {
                self.cursor.bump();
                let value = self.parse_form()?;
                return Ok(Form::bind(token, value));
            }
            Some(b'(') if token == keywords.function => return self.parse_function(),
            Some(b'(') => return self.parse_call(Some(scalar(token))),
            Some(c @ (b'"' | b'[' | b'{')) => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedOpener {
                        token: token.to_string(),
                        opener: char::from(c),
                    },
                    start..end + 1,
                ))
            }
            _ => {}
        }

        if token == keywords.conditional {
            self.parse_conditional(start..end)
        } else if token == keywords.repeat {
            self.parse_loop(start..end)
        } else {
            Ok(scalar(token))
        }
    }
}

/// Convert a finished token to a scalar form.
///
/// `null` is the null literal; an optionally negative run of ASCII digits is
/// an integer (a float if it overflows `i64`); anything that starts like a
/// number and parses as one is a float; every other token is a name.
pub(crate) fn scalar(token: &str) -> Form {
    if token == "null" {
        return Form::Null;
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = token.parse::<i64>() {
            return Form::Int(value);
        }
    }
    if starts_like_number(token) {
        if let Ok(value) = token.parse::<f64>() {
            return Form::Float(value);
        }
    }
    Form::Name(token.to_string())
}

fn starts_like_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'-' | b'+' | b'.') => bytes
            .get(1)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.'),
        _ => false,
    }
}
