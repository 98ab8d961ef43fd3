//! `if`/`elif`/`else` and loops.

use std::ops::Range;

use li_ir::{Branch, Conditional, Form, LoopForm};

use crate::{ParseError, ParseErrorKind, Parser};

impl<'a> Parser<'a> {
    /// `if c { .. } elif c { .. } else { .. }`, cursor after `if`.
    pub(crate) fn parse_conditional(&mut self, keyword: Range<usize>) -> Result<Form, ParseError> {
        let keywords = *self.dialect.keywords();
        let mut branches = vec![self.parse_branch(keyword)?];
        let mut otherwise = None;
        loop {
            let resume = self.cursor.position();
            let (word, span) = self.peek_word();
            if word == keywords.alternative {
                branches.push(self.parse_branch(span)?);
            } else if word == keywords.fallback {
                otherwise = Some(self.parse_block()?);
                break;
            } else {
                self.cursor.set_position(resume);
                break;
            }
        }
        Ok(Form::If(Conditional {
            branches,
            otherwise,
        }))
    }

    /// `while c { .. } else { .. }`, cursor after the loop keyword.
    ///
    /// The optional `else` body runs once after the loop finishes.
    pub(crate) fn parse_loop(&mut self, keyword: Range<usize>) -> Result<Form, ParseError> {
        let branch = self.parse_branch(keyword)?;
        let resume = self.cursor.position();
        let (word, _) = self.peek_word();
        let otherwise = if word == self.dialect.keywords().fallback {
            Some(self.parse_block()?)
        } else {
            self.cursor.set_position(resume);
            None
        };
        Ok(Form::Loop(Box::new(LoopForm { branch, otherwise })))
    }

    /// A condition up to the first top-level `{`, then its block.
    fn parse_branch(&mut self, keyword: Range<usize>) -> Result<Branch, ParseError> {
        self.cursor.skip_separators();
        let Some(brace) = self.cursor.find_block_open() else {
            return Err(ParseError::new(ParseErrorKind::MissingBlock, keyword));
        };
        let condition = self.within(brace, |p| {
            p.cursor.skip_separators();
            if p.cursor.is_at_end() {
                return Err(ParseError::new(ParseErrorKind::MissingCondition, keyword));
            }
            let condition = p.parse_form()?;
            p.cursor.skip_separators();
            if !p.cursor.is_at_end() {
                return Err(ParseError::new(
                    ParseErrorKind::TrailingCondition,
                    p.cursor.position()..brace,
                ));
            }
            Ok(condition)
        })?;
        self.cursor.set_position(brace);
        let body = self.parse_block()?;
        Ok(Branch { condition, body })
    }

    /// Consume the next bare word and report where it was.
    ///
    /// A word directly followed by `:` is a binding key such as `else: 5`,
    /// never a keyword, and comes back empty.
    fn peek_word(&mut self) -> (&'a str, Range<usize>) {
        self.cursor.skip_separators();
        let start = self.cursor.position();
        let word = self.cursor.eat_token();
        let span = start..self.cursor.position();
        if self.cursor.peek() == Some(b':') {
            return ("", span);
        }
        (word, span)
    }
}
