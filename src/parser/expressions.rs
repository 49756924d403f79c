//! Expression parsing implementation
//!
//! Binary expressions use precedence climbing over the dialect's operator
//! table; everything below an operator is a "unary" — a primary literal plus
//! optional index subscripts, a call, or a parenthesized sub-expression.
//!
//! # Grammar
//!
//! ```text
//! expression  ::= unary (op unary)*          (precedence climbing)
//! unary       ::= literal ("[" expression "]")*
//!               | literal "(" arguments ")"
//!               | "(" expression ")"
//! literal     ::= array | char | string | hex | number | identifier
//! ```
//!
//! An expression may legitimately be absent (an empty `for` clause, a bare
//! `return;`), so every entry point yields `Option<Node>`; callers that
//! require a value raise the expectation failure themselves.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::cursor::{is_float, is_identifier_start};
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse an expression (top-level entry point).
    pub(crate) fn parse_expression(&mut self) -> Result<Option<Node>, ParseError> {
        let unary = self.parse_unary()?;
        self.parse_binary(unary, 0)
    }

    /// Parse an expression and then require the terminator `end`.
    pub(crate) fn parse_expression_until(
        &mut self,
        end: &str,
    ) -> Result<Option<Node>, ParseError> {
        let expression = self.parse_expression()?;
        self.cursor.consume(end)?;
        Ok(expression)
    }

    /// Inspect the operator at the cursor without consuming it.
    ///
    /// Walks the configured operator list in order; the table is longest
    /// first, so `<<=` wins over `<<` wins over `<`.
    pub(crate) fn scan_binary_operator(&mut self) -> Result<Option<String>, ParseError> {
        let saved = self.cursor.checkpoint();
        for op in &self.dialect.operators {
            if self.cursor.lookahead(op, false)? {
                self.cursor.restore(saved);
                return Ok(Some(op.clone()));
            }
        }
        Ok(None)
    }

    /// Precedence climbing: absorb operators binding at least as tightly as
    /// `min_precedence`, recursing to the right while a strictly
    /// tighter-binding operator follows.
    pub(crate) fn parse_binary(
        &mut self,
        left: Option<Node>,
        min_precedence: i32,
    ) -> Result<Option<Node>, ParseError> {
        let mut left = left;
        let mut ahead = self.scan_binary_operator()?;
        while let Some(op) = ahead.clone() {
            if self.dialect.precedence_of(&op) < min_precedence {
                break;
            }
            let position = self.cursor.line();
            self.cursor.consume(&op)?;
            let mut right = match self.parse_unary()? {
                Some(node) => node,
                None => return Err(self.cursor.unexpected("right value")),
            };
            ahead = self.scan_binary_operator()?;

            while let Some(next_op) = ahead.clone() {
                if self.dialect.precedence_of(&next_op) <= self.dialect.precedence_of(&op) {
                    break;
                }
                let climbed = self.dialect.precedence_of(&next_op);
                right = match self.parse_binary(Some(right), climbed)? {
                    Some(node) => node,
                    None => return Err(self.cursor.unexpected("right value")),
                };
                ahead = self.scan_binary_operator()?;
            }

            left = Some(Node::BinaryExpression {
                position,
                op,
                left: left.map(Box::new),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    /// Parse a primary with its postfix forms: index subscripts, a call, or
    /// a parenthesized expression when no primary preceded the `(`.
    pub(crate) fn parse_unary(&mut self) -> Result<Option<Node>, ParseError> {
        let literal = self.parse_literal()?;
        let mut indexes: Vec<Option<Node>> = Vec::new();
        while self.cursor.lookahead("[", false)? {
            indexes.push(self.parse_expression()?);
            self.cursor.consume("]")?;
        }
        if !indexes.is_empty() {
            return Ok(Some(Node::IndexExpression {
                position: self.cursor.line(),
                array: literal.map(Box::new),
                indexes,
            }));
        }
        if self.cursor.lookahead("(", false)? {
            if let Some(callee) = literal {
                let position = self.cursor.line();
                let arguments = self.parse_call_arguments()?;
                return Ok(Some(Node::CallExpression {
                    position,
                    callee: Box::new(callee),
                    arguments,
                }));
            }
            let position = self.cursor.line();
            let expression = self.parse_expression()?.map(Box::new);
            self.cursor.consume(")")?;
            return Ok(Some(Node::ParenthesesExpression {
                position,
                expression,
            }));
        }
        Ok(literal)
    }

    /// Comma-separated expressions up to `)`, opening paren already consumed.
    pub(crate) fn parse_call_arguments(&mut self) -> Result<Vec<Option<Node>>, ParseError> {
        let mut arguments = Vec::new();
        if self.cursor.curr() != b')' {
            while !self.cursor.at_end() {
                arguments.push(self.parse_expression()?);
                if !self.cursor.lookahead(",", false)? {
                    break;
                }
            }
        }
        self.cursor.consume(")")?;
        Ok(arguments)
    }

    /// Dispatch on the current character to one of the literal readers.
    /// Returns `None` when no literal starts here, which the unary layer
    /// uses to tell a call from a parenthesized expression.
    pub(crate) fn parse_literal(&mut self) -> Result<Option<Node>, ParseError> {
        if self.cursor.lookahead("{", false)? {
            let position = self.cursor.line();
            let mut entries: Vec<Option<Node>> = Vec::new();
            if self.cursor.curr() != b'}' {
                while !self.cursor.at_end() {
                    entries.push(self.parse_expression()?);
                    if !self.cursor.lookahead(",", false)? {
                        break;
                    }
                }
            }
            self.cursor.consume("}")?;
            Ok(Some(Node::ArrayLiteral {
                position,
                value: entries,
            }))
        } else if self.cursor.curr() == b'\'' {
            self.cursor.next(true, true)?;
            let position = self.cursor.line();
            let value = if self.cursor.curr() == b'\\' {
                self.parse_escape()?
            } else {
                let c = self.cursor.curr();
                self.cursor.next(true, true)?;
                (c as char).to_string()
            };
            self.cursor.consume("'")?;
            Ok(Some(Node::CharLiteral { position, value }))
        } else if self.cursor.curr() == b'"' {
            let position = self.cursor.line();
            let value = self.parse_string(false)?;
            Ok(Some(Node::StringLiteral { position, value }))
        } else if self.cursor.lookahead("0x", false)? {
            Ok(Some(self.parse_number(16)?))
        } else if self.cursor.lookahead("-0x", false)? {
            match self.parse_number(16)? {
                Node::NumberLiteral {
                    position,
                    flavor,
                    is_long,
                    is_unsigned,
                    value,
                } => Ok(Some(Node::NumberLiteral {
                    position,
                    flavor,
                    is_long,
                    is_unsigned,
                    value: format!("-{value}"),
                })),
                other => Ok(Some(other)),
            }
        } else if is_float(self.cursor.curr()) || self.cursor.curr() == b'-' {
            Ok(Some(self.parse_number(10)?))
        } else if is_identifier_start(self.cursor.curr()) {
            Ok(Some(self.parse_identifier(false)?))
        } else {
            Ok(None)
        }
    }
}
