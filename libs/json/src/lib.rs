//! # Model3D JSON
//!
//! A small, dependency-light JSON parser used by the interchange loader.
//! Produces an immutable [`Value`] tree with typed accessors.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Cursor → Parser (recursive descent) → Value
//! ```
//!
//! ## Example
//!
//! ```rust
//! use model3d_json::{parse, Value};
//!
//! let value = parse(r#"{"a": [1, 2.5, "x", true, null]}"#).unwrap();
//! let items = value.field("a").unwrap().as_array().unwrap();
//! assert_eq!(items.len(), 5);
//! assert_eq!(items[2], Value::String("x".into()));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! model3d-json → model3d-interchange (loader) → model3d-mesh
//! ```

pub mod cursor;
pub mod error;
pub mod parser;
pub mod value;

// Re-export public API
pub use cursor::{Cursor, Position};
pub use error::{JsonResult, ParseError, ParseErrorKind, ShapeError};
pub use value::{write_escaped, Object, Value, ValueKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse JSON text into a [`Value`] tree.
///
/// Leading and trailing whitespace is allowed; anything else after the
/// top-level value is rejected.
///
/// ## Example
///
/// ```rust
/// use model3d_json::parse;
///
/// assert!(parse("[1, 2, 3]").is_ok());
/// assert!(parse(r#"{"a":}"#).is_err());
/// ```
pub fn parse(source: &str) -> JsonResult<Value> {
    parser::Parser::new(source).parse()
}

// =============================================================================
// TESTS
// =============================================================================
