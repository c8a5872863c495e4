//! Array and object parsing.

use super::Parser;
use crate::error::{JsonResult, ParseErrorKind};
use crate::value::{Object, Value};

impl<'a> Parser<'a> {
    /// Parse an array.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// array = "[" ws "]" | "[" value ("," value)* "]"
    /// ```
    pub(super) fn parse_array(&mut self) -> JsonResult<Vec<Value>> {
        self.enter()?;
        self.expect('[')?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(']') {
            self.cursor.advance();
            self.leave();
            return Ok(items);
        }

        loop {
            items.push(self.parse_value()?);
            if self.separator(']')? {
                break;
            }
        }

        self.leave();
        Ok(items)
    }

    /// Parse an object. A repeated key replaces the earlier value.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// object = "{" ws "}" | "{" member ("," member)* "}"
    /// member = ws string ws ":" value
    /// ```
    pub(super) fn parse_object(&mut self) -> JsonResult<Object> {
        self.enter()?;
        self.expect('{')?;
        let mut members = Object::new();

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some('}') {
            self.cursor.advance();
            self.leave();
            return Ok(members);
        }

        loop {
            self.cursor.skip_whitespace();
            let key = match self.cursor.peek() {
                Some('"') => self.parse_string()?,
                Some(found) => return Err(self.error(ParseErrorKind::ExpectedKey { found })),
                None => {
                    return Err(self.error(ParseErrorKind::UnexpectedEof {
                        expected: "object key",
                    }))
                }
            };

            self.cursor.skip_whitespace();
            self.expect(':')?;
            let value = self.parse_value()?;
            members.insert(key, value);

            if self.separator('}')? {
                break;
            }
        }

        self.leave();
        Ok(members)
    }

    /// Consume `,` (returns false) or `closer` (returns true).
    fn separator(&mut self, closer: char) -> JsonResult<bool> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(',') => {
                self.cursor.advance();
                Ok(false)
            }
            Some(c) if c == closer => {
                self.cursor.advance();
                Ok(true)
            }
            Some(found) => Err(self.error(ParseErrorKind::ExpectedSeparator { closer, found })),
            None => Err(self.error(ParseErrorKind::UnexpectedEof {
                expected: "',' or closing bracket",
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::parse;
    use crate::value::Value;

    #[test]
    fn test_array_mixed() {
        let v = parse("[1, \"a\", [ ], {}]").unwrap();
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2], Value::Array(vec![]));
        assert!(items[3].is_object());
    }

    #[test]
    fn test_array_trailing_comma_rejected() {
        let err = parse("[1,]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { found: ']' });
    }

    #[test]
    fn test_array_missing_separator() {
        let err = parse("[1 2]").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedSeparator {
                closer: ']',
                found: '2'
            }
        );
    }

    #[test]
    fn test_array_unterminated() {
        let err = parse("[1, 2").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_object_duplicate_key_last_wins() {
        let v = parse(r#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(v.field("k").unwrap(), &Value::Number(2.0));
        assert_eq!(v.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_object_key_must_be_string() {
        let err = parse("{a: 1}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedKey { found: 'a' });
    }

    #[test]
    fn test_object_missing_colon() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedCharacter {
                expected: ':',
                found: '1'
            }
        );
    }

    #[test]
    fn test_object_missing_value() {
        let err = parse(r#"{"a":}"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter { found: '}' });
        assert_eq!(err.position.byte, 5);
    }
}
