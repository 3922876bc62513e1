//! Bounds-checked position within the text being scanned.

/// Returned by peek() and peek_next() once the end of input is reached.
pub const END: u8 = 0;

/// A forward-only byte offset into a borrowed source buffer. Reading past
/// the end is never an error; it yields END instead.
#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(source: &'i str) -> Cursor<'i> {
        Cursor { source, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn peek(&self) -> u8 {
        self.byte_at(self.offset)
    }

    pub fn peek_next(&self) -> u8 {
        self.byte_at(self.offset + 1)
    }

    fn byte_at(&self, i: usize) -> u8 {
        self.source
            .as_bytes()
            .get(i)
            .copied()
            .unwrap_or(END)
    }

    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.offset += 1;
        }
    }

    /// Consume `keyword` if the input at the current position starts with
    /// it. On a mismatch, or if the input ends first, nothing is consumed.
    pub fn matches(&mut self, keyword: &str) -> bool {
        if self
            .remaining()
            .starts_with(keyword.as_bytes())
        {
            self.offset += keyword.len();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while !self.is_finished()
            && self
                .peek()
                .is_ascii_whitespace()
        {
            self.advance();
        }
    }

    /// The text between an earlier offset and the current position.
    /// Callers only ever split at ASCII delimiters, so the range lies on
    /// character boundaries; anything else comes back lossily converted.
    pub fn since(&self, start: usize) -> String {
        let bytes = &self.source.as_bytes()[start.min(self.offset)..self.offset];
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn remaining(&self) -> &'i [u8] {
        &self.source.as_bytes()[self.offset.min(self.source.len())..]
    }
}
