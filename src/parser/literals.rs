//! Lexical readers
//!
//! Identifier, number, character, string, and escape-sequence parsing. These
//! read raw characters through the cursor with space skipping disabled, so
//! literal content is taken verbatim; each reader skips trailing blanks once
//! its token is complete.
//!
//! Number classification mirrors the dialect's literal grammar:
//!
//! ```text
//! number  ::= '-'? digits ('.' digits)? (('e'|'E') '-'? digits)?  suffix?
//! hex     ::= '-'? '0x' hexdigits suffix?
//! suffix  ::= ('l'|'L') (('u'|'U'))?
//! ```
//!
//! A `.` anywhere re-tags the literal as float; a leading `0` without a `.`
//! re-tags it as octal; `l`/`L` prepends `Long` and a following `u`/`U`
//! prepends `Unsigned` to the kind, `Unsigned` outermost.

use crate::parser::ast::{Node, NumberFlavor};
use crate::parser::cursor::{
    bytes_to_string, is_float, is_hex, is_identifier_body, is_identifier_start, is_oct,
};
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    pub(crate) fn parse_identifier(&mut self, keep_blanks: bool) -> Result<Node, ParseError> {
        if !is_identifier_start(self.cursor.curr()) {
            return Err(self.cursor.unexpected("Identifier"));
        }
        let position = self.cursor.line();
        let mut name = vec![self.cursor.curr()];
        self.cursor.next(true, false)?;
        while self.cursor.curr() != 0 && is_identifier_body(self.cursor.curr()) {
            name.push(self.cursor.curr());
            self.cursor.next(true, false)?;
        }
        if !keep_blanks {
            self.cursor.skip_spaces()?;
        }
        Ok(Node::Identifier {
            position,
            name: bytes_to_string(name),
        })
    }

    /// Parse a number literal in the given radix (10 or 16). The caller has
    /// already consumed a `0x` prefix for radix 16; the stored value gets the
    /// prefix back so it reads as written.
    pub(crate) fn parse_number(&mut self, radix: u32) -> Result<Node, ParseError> {
        if radix == 16 && !is_hex(self.cursor.curr()) {
            return Err(self.cursor.unexpected("Number"));
        }
        let position = self.cursor.line();
        let mut flavor = if radix == 16 {
            NumberFlavor::Hex
        } else {
            NumberFlavor::Decimal
        };
        if self.cursor.curr() == b'.' {
            flavor = NumberFlavor::Float;
        }
        let mut value = vec![self.cursor.curr()];
        self.cursor.next(true, false)?;
        loop {
            let c = self.cursor.curr();
            let digit = if radix == 16 { is_hex(c) } else { is_float(c) };
            let in_body = c != 0 && digit;
            let exponent = radix != 16 && (c == b'e' || c == b'E');
            let exponent_sign = c == b'-'
                && radix != 16
                && matches!(self.cursor.previous_byte(), b'e' | b'E');
            if !(in_body || exponent || exponent_sign) {
                break;
            }
            if c == b'.' {
                flavor = NumberFlavor::Float;
            }
            value.push(c);
            self.cursor.next(true, false)?;
        }
        if value[0] == b'0' && flavor != NumberFlavor::Float {
            flavor = NumberFlavor::Oct;
        }
        let mut is_long = false;
        if self.cursor.curr().to_ascii_lowercase() == b'l' {
            is_long = true;
            value.push(self.cursor.curr());
            self.cursor.next(true, false)?;
        }
        let mut is_unsigned = false;
        if self.cursor.curr().to_ascii_lowercase() == b'u' {
            is_unsigned = true;
            value.push(self.cursor.curr());
            self.cursor.next(true, false)?;
        }
        if radix == 16 && self.cursor.curr() == b'.' {
            return Err(self.cursor.unexpected("hex number"));
        }
        if radix == 16 {
            let mut prefixed = b"0x".to_vec();
            prefixed.extend_from_slice(&value);
            value = prefixed;
        }
        self.cursor.skip_spaces()?;
        Ok(Node::NumberLiteral {
            position,
            flavor,
            is_long,
            is_unsigned,
            value: bytes_to_string(value),
        })
    }

    /// Parse the body of a string literal, cursor on the opening quote.
    /// Escapes are resolved by [`Parser::parse_escape`]; everything else is
    /// copied byte for byte, so multibyte content passes through opaquely.
    pub(crate) fn parse_string(&mut self, keep_blanks: bool) -> Result<String, ParseError> {
        let mut value = Vec::new();
        self.cursor.next(true, true)?;
        while self.cursor.curr() != 0 && self.cursor.curr() != b'"' {
            if self.cursor.curr() == b'\\' {
                let escaped = self.parse_escape()?;
                value.extend_from_slice(escaped.as_bytes());
            } else {
                value.push(self.cursor.curr());
                self.cursor.next(true, true)?;
            }
        }
        if !self.cursor.lookahead("\"", keep_blanks)? {
            return Err(self.cursor.unexpected("double quote"));
        }
        Ok(bytes_to_string(value))
    }

    /// Parse one escape sequence, cursor on the backslash.
    ///
    /// `\xHH` (up to two hex digits) and `\NNN` (up to three octal digits)
    /// decode to their byte value; letters in the dialect's escape set keep
    /// the two-character backslash form.
    pub(crate) fn parse_escape(&mut self) -> Result<String, ParseError> {
        self.cursor.advance_raw();
        let c = self.cursor.curr();
        if c == b'x' {
            self.cursor.next(true, true)?;
            let mut code: u32 = 0;
            for _ in 0..2 {
                let digit = self.cursor.curr();
                if is_hex(digit) {
                    code = code * 16 + (digit as char).to_digit(16).unwrap_or(0);
                    self.cursor.next(true, true)?;
                }
            }
            Ok(char::from(code as u8).to_string())
        } else if is_oct(c) {
            let mut code: u32 = 0;
            for _ in 0..3 {
                let digit = self.cursor.curr();
                if is_oct(digit) {
                    code = code * 8 + (digit - b'0') as u32;
                    self.cursor.next(true, true)?;
                }
            }
            Ok(char::from(code as u8).to_string())
        } else if self.dialect.escapes.contains(&c) {
            let escaped = format!("\\{}", c as char);
            self.cursor.next(true, true)?;
            Ok(escaped)
        } else {
            Err(self.cursor.unexpected("escape sequence"))
        }
    }
}
