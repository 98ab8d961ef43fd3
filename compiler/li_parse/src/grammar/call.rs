//! Calls and function literals.

use li_ir::Form;

use crate::cursor::is_separator;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Argument forms between the `(` at the cursor and its matching `)`.
    fn parse_parenthesized(&mut self) -> Result<(usize, Vec<Form>), ParseError> {
        let open = self.cursor.position();
        let Some(close) = self.cursor.find_matching_paren(open) else {
            return Err(ParseError::new(ParseErrorKind::UnclosedParen, open..open + 1));
        };
        self.cursor.bump();
        let args = self.within(close, |p| {
            let mut args = Vec::new();
            loop {
                p.cursor.skip_separators();
                if p.cursor.is_at_end() {
                    return Ok(args);
                }
                args.push(p.parse_form()?);
            }
        })?;
        self.cursor.set_position(close + 1);
        Ok((open, args))
    }

    /// A call with the cursor on `(`.
    ///
    /// With no head token (`(f a b)`) the first element is the head. A `(`
    /// directly after the closing `)` chains another call on the result:
    /// `f(a)(b)`.
    pub(crate) fn parse_call(&mut self, head: Option<Form>) -> Result<Form, ParseError> {
        let (open, mut args) = self.parse_parenthesized()?;
        let head = match head {
            Some(head) => head,
            None if args.is_empty() => {
                return Err(ParseError::new(
                    ParseErrorKind::EmptyCall,
                    open..self.cursor.position(),
                ))
            }
            None => args.remove(0),
        };
        let mut call = Form::call(head, args);
        while self.cursor.peek() == Some(b'(') {
            let (_, args) = self.parse_parenthesized()?;
            call = Form::call(call, args);
        }
        Ok(call)
    }

    /// `def(a b) { body }` with the cursor on `(` after the keyword.
    pub(crate) fn parse_function(&mut self) -> Result<Form, ParseError> {
        let open = self.cursor.position();
        let Some(close) = self.cursor.find_matching_paren(open) else {
            return Err(ParseError::new(ParseErrorKind::UnclosedParen, open..open + 1));
        };
        self.cursor.bump();
        let params = self.within(close, |p| {
            let mut params = Vec::new();
            loop {
                p.cursor.skip_separators();
                if p.cursor.is_at_end() {
                    return Ok(params);
                }
                let start = p.cursor.position();
                let name = p.cursor.eat_token();
                if name.is_empty() || !p.cursor.peek().map_or(true, is_separator) {
                    let end = p.cursor.position().max(start + 1);
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidParameter(p.cursor.slice(start, end).to_string()),
                        start..end,
                    ));
                }
                params.push(name.to_string());
            }
        })?;
        self.cursor.set_position(close + 1);
        let body = self.parse_block()?;
        Ok(Form::function(params, body))
    }
}
