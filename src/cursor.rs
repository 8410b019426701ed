//! Index-based cursor over a line buffer.
//!
//! The block grammar is line-oriented, so the scanner works on a
//! pre-split sequence of lines rather than raw bytes. The cursor is a
//! plain index with small grouping loops; runs of related lines (list
//! items, quote lines, paragraph lines) are consumed with `take_while_run`.

/// A cursor over an ordered, immutable sequence of text lines.
///
/// # Example
/// ```
/// use minimark::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("first\nsecond");
/// assert_eq!(cursor.peek(), Some("first"));
/// cursor.bump();
/// assert_eq!(cursor.peek(), Some("second"));
/// ```
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor over the lines of `input` (already CRLF-normalized).
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n').collect(),
            pos: 0,
        }
    }

    /// Current line index.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Total number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if all lines have been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Peek the current line without advancing.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Advance past the current line.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Consume and return the current line.
    #[inline]
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume the maximal run of lines satisfying `predicate`, calling
    /// `consume` on each. Returns the number of lines consumed.
    pub fn take_while_run<P, F>(&mut self, predicate: P, mut consume: F) -> usize
    where
        P: Fn(&str) -> bool,
        F: FnMut(&'a str),
    {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if !predicate(line) {
                break;
            }
            consume(line);
            self.pos += 1;
        }
        self.pos - start
    }
}

impl std::fmt::Debug for LineCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCursor")
            .field("offset", &self.pos)
            .field("len", &self.lines.len())
            .finish()
    }
}
