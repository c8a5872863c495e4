//! # JSON Parser
//!
//! Single-pass recursive descent parser over a character cursor.
//! No backtracking: the lookahead character decides every branch.
//!
//! ## Example
//!
//! ```rust
//! use model3d_json::parser::Parser;
//!
//! let value = Parser::new("[1, 2]").parse().unwrap();
//! assert!(value.is_array());
//! ```

mod collections;
mod primaries;

use crate::cursor::Cursor;
use crate::error::{JsonResult, ParseError, ParseErrorKind};
use crate::value::Value;
use config::constants::MAX_NESTING_DEPTH;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for JSON.
pub struct Parser<'a> {
    /// Character cursor over the source.
    cursor: Cursor<'a>,
    /// Current array/object nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            depth: 0,
        }
    }

    /// Parse the whole source as exactly one JSON value.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// document = ws value ws EOF
    /// ```
    pub fn parse(mut self) -> JsonResult<Value> {
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(value),
            Some(found) => Err(self.error(ParseErrorKind::TrailingCharacters { found })),
        }
    }

    /// Parse any value, dispatching on the lookahead character.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// value = object | array | string | number | "true" | "false" | "null"
    /// ```
    pub(super) fn parse_value(&mut self) -> JsonResult<Value> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            None => Err(self.error(ParseErrorKind::UnexpectedEof { expected: "value" })),
            Some('{') => self.parse_object().map(Value::Object),
            Some('[') => self.parse_array().map(Value::Array),
            Some('"') => self.parse_string().map(Value::String),
            Some('t') => self.parse_literal("true").map(|_| Value::Bool(true)),
            Some('f') => self.parse_literal("false").map(|_| Value::Bool(false)),
            Some('n') => self.parse_literal("null").map(|_| Value::Null),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number().map(Value::Number),
            Some(found) => Err(self.error(ParseErrorKind::UnexpectedCharacter { found })),
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Consume `expected` or fail.
    pub(super) fn expect(&mut self, expected: char) -> JsonResult<()> {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.cursor.advance();
                Ok(())
            }
            Some(found) => Err(self.error(ParseErrorKind::ExpectedCharacter { expected, found })),
            None => Err(self.error(ParseErrorKind::UnexpectedEof {
                expected: "punctuation",
            })),
        }
    }

    /// Consume the next character or fail with an end-of-input error.
    pub(super) fn next_char(&mut self, expected: &'static str) -> JsonResult<char> {
        match self.cursor.advance() {
            Some(c) => Ok(c),
            None => Err(self.error(ParseErrorKind::UnexpectedEof { expected })),
        }
    }

    /// Enter an array or object, enforcing the nesting limit.
    pub(super) fn enter(&mut self) -> JsonResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Build an error at the current position.
    pub(super) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.position())
    }
}

// =============================================================================
// TESTS
// =============================================================================
