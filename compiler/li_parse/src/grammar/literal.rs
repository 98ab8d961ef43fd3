//! String, list and map literals, and `{ ... }` statement blocks.

use li_ir::{Bindings, Form};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `"..."` with the cursor on the opening quote.
    ///
    /// `\n` becomes a newline; a backslash before any other character keeps
    /// that character literally, so `\\` is one backslash and `\"` a quote.
    pub(crate) fn parse_string(&mut self) -> Result<Form, ParseError> {
        let open = self.cursor.position();
        self.cursor.bump();
        let mut text = String::new();
        let mut run_start = self.cursor.position();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedString,
                        open..self.cursor.position(),
                    ))
                }
                Some(b'"') => {
                    text.push_str(self.cursor.slice(run_start, self.cursor.position()));
                    self.cursor.bump();
                    return Ok(Form::Str(text));
                }
                Some(b'\\') => {
                    text.push_str(self.cursor.slice(run_start, self.cursor.position()));
                    self.cursor.bump();
                    let escaped_at = self.cursor.position();
                    match self.cursor.peek() {
                        None => {
                            return Err(ParseError::new(
                                ParseErrorKind::UnterminatedString,
                                open..escaped_at,
                            ))
                        }
                        Some(b'n') => {
                            text.push('\n');
                            self.cursor.bump();
                            run_start = self.cursor.position();
                        }
                        // Any other escaped character, possibly multi-byte,
                        // starts the next verbatim run.
                        Some(_) => {
                            run_start = escaped_at;
                            self.cursor.bump();
                        }
                    }
                }
                Some(_) => self.cursor.bump(),
            }
        }
    }

    /// `[a b c]` with the cursor on `[`.
    pub(crate) fn parse_list(&mut self) -> Result<Form, ParseError> {
        let open = self.cursor.position();
        self.cursor.bump();
        let items = self.parse_until(b']', open, ParseErrorKind::UnterminatedList)?;
        Ok(Form::List(items))
    }

    /// `{k: v ...}` with the cursor on `{`.
    pub(crate) fn parse_map(&mut self) -> Result<Form, ParseError> {
        let open = self.cursor.position();
        self.cursor.bump();
        let mut entries = Bindings::new();
        loop {
            self.cursor.skip_separators();
            match self.cursor.peek() {
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedMap,
                        open..open + 1,
                    ))
                }
                Some(b'}') => {
                    self.cursor.bump();
                    return Ok(Form::Map(entries));
                }
                Some(_) => {
                    let start = self.cursor.position();
                    match self.parse_form()? {
                        Form::Bind(bindings) => entries.merge(bindings),
                        other => {
                            return Err(ParseError::new(
                                ParseErrorKind::MapEntryNotBinding(other.kind()),
                                start..self.cursor.position(),
                            ))
                        }
                    }
                }
            }
        }
    }

    /// `{ stmt stmt ... }` after optional separators.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Form>, ParseError> {
        self.cursor.skip_separators();
        let open = self.cursor.position();
        if self.cursor.peek() != Some(b'{') {
            return Err(ParseError::new(ParseErrorKind::MissingBlock, open..open));
        }
        self.cursor.bump();
        self.parse_until(b'}', open, ParseErrorKind::UnterminatedBlock)
    }

    /// Forms up to and including `close`.
    fn parse_until(
        &mut self,
        close: u8,
        open: usize,
        unterminated: ParseErrorKind,
    ) -> Result<Vec<Form>, ParseError> {
        let mut forms = Vec::new();
        loop {
            self.cursor.skip_separators();
            match self.cursor.peek() {
                None => return Err(ParseError::new(unterminated, open..open + 1)),
                Some(c) if c == close => {
                    self.cursor.bump();
                    return Ok(forms);
                }
                Some(_) => forms.push(self.parse_form()?),
            }
        }
    }
}
