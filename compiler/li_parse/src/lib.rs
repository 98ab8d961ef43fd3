//! Scanning parser for Li.
//!
//! Li has no separate lexer: the parser walks the source text once,
//! accumulating bare tokens and switching mode on the structural characters
//! `" ( ) [ ] { } :`. A program is a series of `name: value` bindings merged
//! into one [`Program`].
//!
//! ```text
//! main: def() {
//!     (println (+ 1 2 3))
//! }
//! ```

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use li_ir::{Dialect, Form, Program};

/// Parser state: a cursor over the source and the active dialect.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Parser {
            cursor: Cursor::new(source),
            dialect,
        }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Text not consumed yet.
    pub fn remaining(&self) -> &'a str {
        self.cursor.rest()
    }

    /// Parse bindings until the input is exhausted, merging them.
    ///
    /// A later binding of the same name replaces the earlier value but keeps
    /// its position.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.is_at_end() {
                break;
            }
            let start = self.cursor.position();
            match self.parse_form()? {
                Form::Bind(bindings) => program.merge(bindings),
                other => {
                    return Err(ParseError::new(
                        ParseErrorKind::TopLevelNotBinding(other.kind()),
                        start..self.cursor.position(),
                    ))
                }
            }
        }
        tracing::debug!(bindings = program.len(), "parsed program");
        Ok(program)
    }

    /// Run `f` with the cursor limited to `end`, restoring the previous limit
    /// afterwards.
    fn within<T>(
        &mut self,
        end: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = self.cursor.limit();
        self.cursor.set_limit(end);
        let result = f(self);
        self.cursor.set_limit(saved);
        result
    }
}

/// Parse a whole program in the default (English) dialect.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_dialect(source, Dialect::default())
}

pub fn parse_with_dialect(source: &str, dialect: Dialect) -> Result<Program, ParseError> {
    Parser::new(source, dialect).parse_program()
}

/// Parse a single form, returning the unconsumed remainder alongside it.
pub fn parse_one(source: &str, dialect: Dialect) -> Result<(&str, Form), ParseError> {
    let mut parser = Parser::new(source, dialect);
    let form = parser.parse_form()?;
    Ok((parser.remaining(), form))
}

#[cfg(test)]
mod tests;
