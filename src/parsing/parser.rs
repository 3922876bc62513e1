//! Recognizing hscpp directives in C++ source text.
//!
//! This is deliberately not a C++ lexer. The only things that need to be
//! understood are comments and string literals (so that directives written
//! inside them are ignored) and the four directive shapes themselves.
//! Everything else is stepped over one byte at a time.

use std::fmt;

use crate::language::{ParseResult, Require, RequireKind};

use super::cursor::Cursor;

pub const PREPROCESSOR_DEFINITIONS: &str = "hscpp_preprocessor_definitions";

/// Parse a buffer in one pass. Malformed directives are skipped and
/// returned alongside whatever was successfully recognized.
pub fn parse_with_recovery(content: &str) -> (ParseResult, Vec<ParsingError>) {
    let mut input = Parser::new(content);
    input.parse_from_start();
    input.finish()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    MissingClosingParen(usize, &'static str),
    MissingOpeningQuote(usize),
    UnterminatedString(usize),
    InvalidDefinition(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::MissingClosingParen(offset, _) => *offset,
            ParsingError::MissingOpeningQuote(offset) => *offset,
            ParsingError::UnterminatedString(offset) => *offset,
            ParsingError::InvalidDefinition(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::MissingClosingParen(_, keyword) => {
                format!("{} missing closing ')'", keyword)
            }
            ParsingError::MissingOpeningQuote(_) => "missing opening '\"'".to_string(),
            ParsingError::UnterminatedString(_) => {
                "unterminated string, expected a '\"'".to_string()
            }
            ParsingError::InvalidDefinition(_) => {
                "expected a quoted string or identifier".to_string()
            }
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// What shape each argument of a directive must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arguments {
    /// double-quoted strings only
    Paths,
    /// double-quoted strings or bare identifiers
    Definitions,
}

#[derive(Debug)]
pub struct Parser<'i> {
    cursor: Cursor<'i>,
    result: ParseResult,
    problems: Vec<ParsingError>,
}

impl<'i> Parser<'i> {
    pub fn new(content: &'i str) -> Parser<'i> {
        Parser {
            cursor: Cursor::new(content),
            result: ParseResult::default(),
            problems: Vec::new(),
        }
    }

    pub fn finish(self) -> (ParseResult, Vec<ParsingError>) {
        (self.result, self.problems)
    }

    pub fn parse_from_start(&mut self) {
        while !self
            .cursor
            .is_finished()
        {
            let start = self
                .cursor
                .offset();

            match self
                .cursor
                .peek()
            {
                b'/' if self
                    .cursor
                    .is_line_comment() =>
                {
                    self.cursor
                        .skip_line_comment();
                }
                b'/' if self
                    .cursor
                    .is_block_comment() =>
                {
                    self.cursor
                        .skip_block_comment();
                }
                b'"' => {
                    self.cursor
                        .skip_string();
                }
                b'h' => {
                    if let Err(error) = self.read_directive() {
                        self.problems
                            .push(error);
                    }
                }
                _ => {}
            }

            // nothing recognized here, so step over it
            if self
                .cursor
                .offset()
                == start
            {
                self.cursor
                    .advance();
            }
        }
    }

    /// Attempt each directive keyword at the current position. Returns
    /// Ok without recording anything if none of them is actually here.
    fn read_directive(&mut self) -> Result<(), ParsingError> {
        for kind in [RequireKind::Source, RequireKind::Include, RequireKind::Library] {
            let keyword = kind.keyword();
            if self
                .cursor
                .matches(keyword)
            {
                if let Some(paths) = self.read_arguments(Arguments::Paths, keyword)? {
                    self.result
                        .requires
                        .push(Require { kind, paths });
                }
                return Ok(());
            }
        }

        if self
            .cursor
            .matches(PREPROCESSOR_DEFINITIONS)
        {
            if let Some(definitions) =
                self.read_arguments(Arguments::Definitions, PREPROCESSOR_DEFINITIONS)?
            {
                self.result
                    .preprocessor_definitions
                    .extend(definitions);
            }
        }

        Ok(())
    }

    /// Read a parenthesized, comma separated argument list. If there is no
    /// opening '(' this isn't one of our directives at all (someone may
    /// well have a symbol called hscpp_require_source_custom) and None is
    /// returned. Once the '(' is seen, malformed input is an error.
    fn read_arguments(
        &mut self,
        shape: Arguments,
        keyword: &'static str,
    ) -> Result<Option<Vec<String>>, ParsingError> {
        self.cursor
            .skip_whitespace();

        if self
            .cursor
            .peek()
            != b'('
        {
            return Ok(None);
        }

        let mut arguments = Vec::new();
        loop {
            self.cursor
                .advance(); // ( or ,
            self.cursor
                .skip_whitespace();

            let argument = match shape {
                Arguments::Paths => self.read_string()?,
                Arguments::Definitions => self.read_definition()?,
            };
            arguments.push(argument);

            self.cursor
                .skip_whitespace();
            if self
                .cursor
                .peek()
                != b','
            {
                break;
            }
        }

        if self
            .cursor
            .peek()
            != b')'
        {
            return Err(ParsingError::MissingClosingParen(
                self.cursor
                    .offset(),
                keyword,
            ));
        }
        self.cursor
            .advance();

        Ok(Some(arguments))
    }

    /// Read a double-quoted string, replacing any escaped quotes with the
    /// quote character itself. Other escapes are kept as written.
    fn read_string(&mut self) -> Result<String, ParsingError> {
        let start = self
            .cursor
            .offset();

        if self
            .cursor
            .peek()
            != b'"'
        {
            return Err(ParsingError::MissingOpeningQuote(start));
        }
        self.cursor
            .advance();

        let mut bytes = Vec::new();
        while !self
            .cursor
            .is_finished()
            && self
                .cursor
                .peek()
                != b'"'
        {
            let c = self
                .cursor
                .peek();
            let next = self
                .cursor
                .peek_next();

            if c == b'\\' && next == b'"' {
                bytes.push(b'"');
                self.cursor
                    .advance();
            } else if c == b'\\' && next == b'\\' {
                bytes.extend_from_slice(b"\\\\");
                self.cursor
                    .advance();
            } else {
                bytes.push(c);
            }
            self.cursor
                .advance();
        }

        if self
            .cursor
            .is_finished()
        {
            return Err(ParsingError::UnterminatedString(start));
        }
        self.cursor
            .advance(); // "

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Preprocessor definitions are accepted both as strings and as bare
    /// identifiers.
    fn read_definition(&mut self) -> Result<String, ParsingError> {
        let start = self
            .cursor
            .offset();
        let c = self
            .cursor
            .peek();

        if c == b'"' {
            self.read_string()
        } else if is_identifier_start(c) {
            while is_identifier_char(
                self.cursor
                    .peek(),
            ) {
                self.cursor
                    .advance();
            }
            Ok(self
                .cursor
                .since(start))
        } else {
            Err(ParsingError::InvalidDefinition(start))
        }
    }
}

fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

#[cfg(test)]
#[path = "checks/parser.rs"]
mod check;
