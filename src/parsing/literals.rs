//! Skipping over comments and string literals without looking inside them.

use super::cursor::Cursor;

impl<'i> Cursor<'i> {
    pub fn is_line_comment(&self) -> bool {
        self.peek() == b'/' && self.peek_next() == b'/'
    }

    pub fn is_block_comment(&self) -> bool {
        self.peek() == b'/' && self.peek_next() == b'*'
    }

    pub fn is_block_comment_end(&self) -> bool {
        self.peek() == b'*' && self.peek_next() == b'/'
    }

    /// Skip `//` through the end of the line, including the newline.
    pub fn skip_line_comment(&mut self) {
        self.advance(); // /
        self.advance(); // /
        while !self.is_finished() && self.peek() != b'\n' {
            self.advance();
        }
        self.advance(); // \n
    }

    /// Skip `/*` through the matching `*/`. An unterminated comment runs to
    /// the end of input.
    pub fn skip_block_comment(&mut self) {
        self.advance(); // /
        self.advance(); // *
        while !self.is_finished() && !self.is_block_comment_end() {
            self.advance();
        }
        self.advance(); // *
        self.advance(); // /
    }

    /// Skip a double-quoted string literal. A backslash always escapes the
    /// byte after it, so neither `\"` nor the quote following `\\` is
    /// treated as the terminator.
    pub fn skip_string(&mut self) {
        self.advance(); // "
        while !self.is_finished() && self.peek() != b'"' {
            if self.peek() == b'\\' {
                self.advance();
            }
            self.advance();
        }
        self.advance(); // "
    }
}
