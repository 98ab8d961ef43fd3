//! Byte cursor over Li source text.
//!
//! Every structural character in Li is ASCII, so the cursor scans bytes and
//! only hands out `&str` slices cut at ASCII boundaries. The cursor carries an
//! `end` limit so a call's argument list or a condition can be parsed in
//! isolation from the text that follows it.

/// Separators between forms: whitespace, `,` and `;`.
#[inline]
pub(crate) fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | b',' | b';')
}

/// Characters that end a bare token.
#[inline]
pub(crate) fn is_delimiter(b: u8) -> bool {
    is_separator(b) || matches!(b, b'"' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b':')
}

pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            end: source.len(),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to `pos`, which must lie within the current limit.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.end, "cursor position {pos} past limit {}", self.end);
        self.pos = pos;
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn set_limit(&mut self, end: usize) {
        self.end = end;
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_at_end() {
            None
        } else {
            Some(self.source.as_bytes()[self.pos])
        }
    }

    #[inline]
    pub fn bump(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Source text between two offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Unparsed text up to the limit.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos.min(self.end)..self.end]
    }

    pub fn skip_separators(&mut self) {
        while self.peek().is_some_and(is_separator) {
            self.pos += 1;
        }
    }

    /// Consume a bare token and return it. Empty if the cursor sits on a
    /// delimiter.
    pub fn eat_token(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| !is_delimiter(b)) {
            self.pos += 1;
        }
        self.slice(start, self.pos)
    }

    /// Offset just past the string literal opening at `open`, or `None` if it
    /// is unterminated before the limit.
    fn skip_string(&self, open: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut i = open + 1;
        while i < self.end {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => return Some(i + 1),
                _ => i += 1,
            }
        }
        None
    }

    /// Offset of the `)` matching the `(` at `open`.
    ///
    /// Nesting is tracked with a depth counter; string literals are skipped
    /// so a quoted paren does not count.
    pub fn find_matching_paren(&self, open: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 0usize;
        let mut i = open + 1;
        while i < self.end {
            match bytes[i] {
                b'"' => {
                    i = self.skip_string(i)?;
                    continue;
                }
                b'(' => depth += 1,
                b')' => {
                    if depth == 0 {
                        return Some(i);
                    }
                    depth -= 1;
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Offset of the first `{` after the cursor that is not inside a string,
    /// call or list. Conditions end there.
    pub fn find_block_open(&self) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 0usize;
        let mut i = self.pos;
        while i < self.end {
            match bytes[i] {
                b'"' => {
                    i = self.skip_string(i)?;
                    continue;
                }
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                b'{' if depth == 0 => return Some(i),
                _ => {}
            }
            i += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests;
