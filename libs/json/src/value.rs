//! # JSON Value Tree
//!
//! Closed sum type over the six JSON shapes, with accessors that fail
//! explicitly on a shape mismatch instead of casting.

use crate::error::ShapeError;
use std::collections::BTreeMap;
use std::fmt;

/// Object representation. Duplicate keys keep the last value parsed.
pub type Object = BTreeMap<String, Value>;

// 2^63: i64::MAX is not representable as f64, so this is the first value out of range
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A parsed JSON value.
///
/// ## Example
///
/// ```rust
/// use model3d_json::Value;
///
/// let v = Value::Array(vec![Value::Number(1.0), Value::Null]);
/// assert!(v.is_array());
/// assert_eq!(v.to_string(), "[1,null]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

/// The shape of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> ShapeError {
        ShapeError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Borrows the string contents.
    pub fn as_str(&self) -> Result<&str, ShapeError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Reads a number.
    pub fn as_f64(&self) -> Result<f64, ShapeError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    /// Reads a number truncated toward zero.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_json::Value;
    ///
    /// assert_eq!(Value::Number(-2.9).as_i64().unwrap(), -2);
    /// assert!(Value::Number(1e300).as_i64().is_err());
    /// ```
    pub fn as_i64(&self) -> Result<i64, ShapeError> {
        let n = self.as_f64()?;
        let truncated = n.trunc();
        if !truncated.is_finite() || truncated < -I64_BOUND || truncated >= I64_BOUND {
            return Err(ShapeError::NumberOutOfRange {
                value: n,
                target: "i64",
            });
        }
        Ok(truncated as i64)
    }

    /// Reads a non-negative integer that fits in `u32`.
    pub fn as_u32(&self) -> Result<u32, ShapeError> {
        let n = self.as_i64()?;
        u32::try_from(n).map_err(|_| ShapeError::NumberOutOfRange {
            value: n as f64,
            target: "u32",
        })
    }

    pub fn as_bool(&self) -> Result<bool, ShapeError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], ShapeError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object, ShapeError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Looks up `key` if this is an object; `None` for absent keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up a required key; fails if this is not an object or the key is absent.
    pub fn field(&self, key: &str) -> Result<&Value, ShapeError> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| ShapeError::MissingKey {
                key: key.to_string(),
            })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

// =============================================================================
// COMPACT SERIALIZATION
// =============================================================================

/// Writes `text` as a quoted JSON string.
pub fn write_escaped(f: &mut impl fmt::Write, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_finite() => write!(f, "{n}"),
            // JSON has no NaN or infinity
            Value::Number(_) => f.write_str("null"),
            Value::String(s) => write_escaped(f, s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(ValueKind::Bool.to_string(), "boolean");
    }

    #[test]
    fn test_accessor_mismatch() {
        let v = Value::from("text");
        assert!(v.as_f64().is_err());
        assert!(v.as_bool().is_err());
        assert!(v.as_array().is_err());
        assert!(v.as_object().is_err());
        assert_eq!(v.as_str().unwrap(), "text");
    }

    #[test]
    fn test_as_i64_truncates() {
        assert_eq!(Value::Number(3.99).as_i64().unwrap(), 3);
        assert_eq!(Value::Number(-0.5).as_i64().unwrap(), 0);
        assert!(Value::Number(f64::NAN).as_i64().is_err());
    }

    #[test]
    fn test_as_u32_rejects_negative() {
        assert_eq!(Value::Number(16_777_215.0).as_u32().unwrap(), 0xFF_FFFF);
        assert!(matches!(
            Value::Number(-1.0).as_u32(),
            Err(ShapeError::NumberOutOfRange { target: "u32", .. })
        ));
    }

    #[test]
    fn test_get_and_field() {
        let mut map = Object::new();
        map.insert("a".into(), Value::Bool(false));
        let v = Value::Object(map);
        assert_eq!(v.get("a"), Some(&Value::Bool(false)));
        assert_eq!(v.get("b"), None);
        assert!(matches!(v.field("b"), Err(ShapeError::MissingKey { .. })));
        assert_eq!(Value::Null.get("a"), None);
    }

    #[test]
    fn test_display_escapes() {
        let v = Value::from("a\"b\\c\n\u{01}");
        assert_eq!(v.to_string(), r#""a\"b\\c\n\u0001""#);
    }

    #[test]
    fn test_display_object_sorted_keys() {
        let mut map = Object::new();
        map.insert("z".into(), Value::Number(1.5));
        map.insert("a".into(), Value::Array(vec![]));
        assert_eq!(Value::Object(map).to_string(), r#"{"a":[],"z":1.5}"#);
    }

    #[test]
    fn test_display_non_finite_as_null() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "null");
    }
}
