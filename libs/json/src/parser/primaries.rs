//! # Primary Value Parsing
//!
//! Parses the leaf values: strings, numbers and the three literals.
//!
//! ## Responsibilities
//!
//! - Strings with escapes: `"a\"b"`, `"\u00e9"`, `"\ud83d\ude00"`
//! - Numbers: `0`, `-12`, `3.25`, `1e-3`
//! - Literals: `true`, `false`, `null`

use super::Parser;
use crate::error::{JsonResult, ParseErrorKind};

impl<'a> Parser<'a> {
    /// Parse a string, resolving escapes.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// string = '"' (char | escape)* '"'
    /// escape = '\' ( '"' | '\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u' hex{4} )
    /// ```
    pub(super) fn parse_string(&mut self) -> JsonResult<String> {
        self.expect('"')?;
        let mut text = String::new();

        loop {
            match self.next_char("closing quote")? {
                '"' => return Ok(text),
                '\\' => text.push(self.parse_escape()?),
                c => text.push(c),
            }
        }
    }

    /// Parse the remainder of an escape sequence after the backslash.
    fn parse_escape(&mut self) -> JsonResult<char> {
        let c = self.next_char("escape sequence")?;
        let resolved = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.parse_unicode_escape(),
            other => {
                return Err(self.error(ParseErrorKind::InvalidEscape {
                    sequence: format!("\\{other}"),
                }))
            }
        };
        Ok(resolved)
    }

    /// Parse `XXXX` after `\u`, joining a surrogate pair when one follows.
    fn parse_unicode_escape(&mut self) -> JsonResult<char> {
        let high = self.parse_hex4()?;

        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(self.invalid_unicode(high));
        }

        if !(0xD800..=0xDBFF).contains(&high) {
            return char::from_u32(high).ok_or_else(|| self.invalid_unicode(high));
        }

        // High surrogate: a low surrogate escape must follow.
        if !self.cursor.eat("\\u") {
            return Err(self.invalid_unicode(high));
        }
        let low = self.parse_hex4()?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(self.invalid_unicode(low));
        }

        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).ok_or_else(|| self.invalid_unicode(code))
    }

    fn parse_hex4(&mut self) -> JsonResult<u32> {
        let mut code = 0;
        let mut digits = String::with_capacity(4);
        for _ in 0..4 {
            let c = self.next_char("hex digit")?;
            digits.push(c);
            match c.to_digit(16) {
                Some(d) => code = code * 16 + d,
                None => {
                    return Err(self.error(ParseErrorKind::InvalidEscape {
                        sequence: format!("\\u{digits}"),
                    }))
                }
            }
        }
        Ok(code)
    }

    fn invalid_unicode(&self, code: u32) -> crate::error::ParseError {
        self.error(ParseErrorKind::InvalidEscape {
            sequence: format!("\\u{code:04x}"),
        })
    }

    /// Parse a number.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// number = "-"? ("0" | [1-9][0-9]*) ("." [0-9]+)? ([eE] [+-]? [0-9]+)?
    /// ```
    pub(super) fn parse_number(&mut self) -> JsonResult<f64> {
        let start = self.cursor.position().byte;

        if self.cursor.peek() == Some('-') {
            self.cursor.advance();
        }

        match self.cursor.peek() {
            Some('0') => {
                self.cursor.advance();
                // No leading zeros: "01" is not a number.
                if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.cursor.advance_while(|c| c.is_ascii_digit());
                    return Err(self.invalid_number(start));
                }
            }
            Some(c) if c.is_ascii_digit() => self.cursor.advance_while(|c| c.is_ascii_digit()),
            _ => return Err(self.invalid_number(start)),
        }

        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            if !self.digits() {
                return Err(self.invalid_number(start));
            }
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            if !self.digits() {
                return Err(self.invalid_number(start));
            }
        }

        let text = self.cursor.slice_from(start);
        text.parse::<f64>().map_err(|_| self.invalid_number(start))
    }

    /// Consume one or more digits; false if none were present.
    fn digits(&mut self) -> bool {
        if !self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        self.cursor.advance_while(|c| c.is_ascii_digit());
        true
    }

    fn invalid_number(&self, start: usize) -> crate::error::ParseError {
        self.error(ParseErrorKind::InvalidNumber {
            text: self.cursor.slice_from(start).to_string(),
        })
    }

    /// Consume `literal` exactly.
    pub(super) fn parse_literal(&mut self, literal: &'static str) -> JsonResult<()> {
        if self.cursor.eat(literal) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::InvalidLiteral { expected: literal }))
        }
    }
}
