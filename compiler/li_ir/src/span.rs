//! Byte spans into Li source text.

use std::fmt;

/// Half-open byte range `start..end` into a source file.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Span for a byte range, saturating offsets past `u32::MAX`.
    ///
    /// Parse errors are reported on sources that were already read into
    /// memory, so an oversized offset only degrades the snippet.
    #[inline]
    pub fn saturating(range: std::ops::Range<usize>) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    /// Byte range for slicing the source or labelling a snippet.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
