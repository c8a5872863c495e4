//! # JSON Errors
//!
//! Error types for parsing JSON text and for reading the resulting tree.
//!
//! ## Example
//!
//! ```rust
//! use model3d_json::parse;
//!
//! let error = parse("[1,").unwrap_err();
//! println!("{}", error);
//! ```

use crate::cursor::Position;
use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// Result type alias for parsing and accessor operations.
pub type JsonResult<T> = Result<T, ParseError>;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
///
/// Parse errors are fatal: the parser stops at the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} (byte {})",
            self.kind, self.position, self.position.byte
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A value was expected but this character cannot start one.
    #[error("unexpected character '{found}'")]
    UnexpectedCharacter {
        /// Character that was found.
        found: char,
    },

    /// A specific punctuation character was required.
    #[error("expected '{expected}', found '{found}'")]
    ExpectedCharacter {
        /// Required character.
        expected: char,
        /// Character that was found.
        found: char,
    },

    /// An object key (a string) was required.
    #[error("expected string key, found '{found}'")]
    ExpectedKey {
        /// Character that was found.
        found: char,
    },

    /// Inside a container, neither `,` nor the closing bracket followed a value.
    #[error("expected ',' or '{closer}', found '{found}'")]
    ExpectedSeparator {
        /// Closing bracket of the enclosing container.
        closer: char,
        /// Character that was found.
        found: char,
    },

    /// Input ended in the middle of a value.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: &'static str,
    },

    /// Invalid escape sequence in string.
    #[error("invalid escape sequence '{sequence}'")]
    InvalidEscape {
        /// The invalid escape sequence.
        sequence: String,
    },

    /// Invalid number literal.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Malformed `true`, `false` or `null`.
    #[error("invalid literal, expected '{expected}'")]
    InvalidLiteral {
        /// Literal that the lookahead character announced.
        expected: &'static str,
    },

    /// Arrays and objects nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// Maximum accepted depth.
        limit: usize,
    },

    /// Non-whitespace input after the top-level value.
    #[error("trailing characters after value, found '{found}'")]
    TrailingCharacters {
        /// First trailing character.
        found: char,
    },
}

// =============================================================================
// SHAPE ERROR
// =============================================================================

/// A value was read with the wrong expected shape.
///
/// ## Example
///
/// ```rust
/// use model3d_json::{Value, ShapeError, ValueKind};
///
/// let err = Value::Bool(true).as_f64().unwrap_err();
/// assert_eq!(err, ShapeError::TypeMismatch { expected: ValueKind::Number, found: ValueKind::Bool });
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// The stored variant differs from the requested one.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested shape.
        expected: ValueKind,
        /// Stored shape.
        found: ValueKind,
    },

    /// A required object key is absent.
    #[error("missing key '{key}'")]
    MissingKey {
        /// The absent key.
        key: String,
    },

    /// A number cannot be represented in the requested integer type.
    #[error("number {value} does not fit in {target}")]
    NumberOutOfRange {
        /// Stored number.
        value: f64,
        /// Requested integer type.
        target: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================
