//! # Character Cursor
//!
//! Peekable character cursor for the JSON parser.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use model3d_json::Cursor;
//!
//! let mut cursor = Cursor::new("[1]");
//! assert_eq!(cursor.peek(), Some('['));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('1'));
//! ```

use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A location in the source text.
///
/// `line` and `column` are 0-indexed; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// ## Example
///
/// ```rust
/// use model3d_json::Cursor;
///
/// let mut cursor = Cursor::new("null");
/// assert_eq!(cursor.advance(), Some('n'));
/// assert_eq!(cursor.position().byte, 1);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Get current position.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of input.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_json::Cursor;
    ///
    /// assert!(Cursor::new("").is_eof());
    /// ```
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_json::Cursor;
    ///
    /// let mut cursor = Cursor::new("123,");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.peek(), Some(','));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip JSON insignificant whitespace.
    pub fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    /// Check whether the remaining input starts with `literal`.
    pub fn starts_with(&self, literal: &str) -> bool {
        self.source[self.byte..].starts_with(literal)
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_json::Cursor;
    ///
    /// let mut cursor = Cursor::new("true,");
    /// assert!(cursor.eat("true"));
    /// assert_eq!(cursor.peek(), Some(','));
    /// ```
    pub fn eat(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        for _ in literal.chars() {
            self.advance();
        }
        true
    }

    /// Source text between `start` (a byte offset) and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_newline() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_cursor_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_cursor_eat_mismatch_does_not_advance() {
        let mut cursor = Cursor::new("nul");
        assert!(!cursor.eat("null"));
        assert_eq!(cursor.position().byte, 0);
    }

    #[test]
    fn test_cursor_slice_from() {
        let mut cursor = Cursor::new("-12.5]");
        cursor.advance_while(|c| c != ']');
        assert_eq!(cursor.slice_from(0), "-12.5");
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte, 2);
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0, 0).to_string(), "line 1, column 1");
    }
}
