//! Statement parsing implementation
//!
//! Statement dispatch is a keyword look-ahead chain tried in a fixed order:
//! `if`, `while`, `do`, `for`, `return`, `break`, `continue`, then the
//! declaration probe, then an expression statement as the fallback.
//!
//! # Grammar
//!
//! ```text
//! statement ::= if_stmt | while_stmt | do_while_stmt | for_stmt
//!             | return_stmt | break_stmt | continue_stmt
//!             | definition | expression ";"
//! body      ::= "{" statement* "}"            (BlockStatement)
//!             | ";" | statement               (InlineStatement)
//! ```
//!
//! Bodies are where pending comments come home: each statement boundary
//! flushes the cursor's comment queue into the surrounding sequence, so
//! comments appear between the statements they separated in the source.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{Node, StorageScope};
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse one statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        if self.cursor.lookahead("if", false)? {
            let position = self.cursor.line();
            self.cursor.consume("(")?;
            let condition = match self.parse_expression_until(")")? {
                Some(node) => node,
                None => return Err(self.cursor.unexpected("if condition")),
            };
            if self.cursor.lookahead("else", false)? {
                return Err(self.cursor.unexpected("if body statement"));
            }
            let body = self.parse_body(false)?;
            let else_body = if self.cursor.lookahead("else", false)? {
                Some(Box::new(self.parse_body(false)?))
            } else {
                None
            };
            Ok(Node::IfStatement {
                position,
                condition: Box::new(condition),
                body: Box::new(body),
                else_body,
            })
        } else if self.cursor.lookahead("while", false)? {
            let position = self.cursor.line();
            self.cursor.consume("(")?;
            let condition = match self.parse_expression_until(")")? {
                Some(node) => node,
                None => return Err(self.cursor.unexpected("while condition")),
            };
            let body = self.parse_body(false)?;
            Ok(Node::WhileStatement {
                position,
                condition: Box::new(condition),
                body: Box::new(body),
            })
        } else if self.cursor.lookahead("do", false)? {
            let position = self.cursor.line();
            let body = self.parse_body(false)?;
            self.cursor.consume("while")?;
            self.cursor.consume("(")?;
            let condition = match self.parse_expression_until(")")? {
                Some(node) => node,
                None => return Err(self.cursor.unexpected("while condition")),
            };
            self.cursor.consume(";")?;
            Ok(Node::DoWhileStatement {
                position,
                condition: Box::new(condition),
                body: Box::new(body),
            })
        } else if self.cursor.lookahead("for", false)? {
            let position = self.cursor.line();
            self.cursor.consume("(")?;
            let mut init = self.parse_statement()?;
            if let Node::Variable {
                scope,
                lengths: None,
                ..
            } = &mut init
            {
                if *scope == StorageScope::Local {
                    *scope = StorageScope::For;
                }
            }
            let condition = self.parse_expression_until(";")?;
            let step = self.parse_expression_until(")")?;
            let body = self.parse_body(false)?;
            Ok(Node::ForStatement {
                position,
                init: Box::new(init),
                condition: condition.map(Box::new),
                step: step.map(Box::new),
                body: Box::new(body),
            })
        } else if self.cursor.lookahead("return", false)? {
            let position = self.cursor.line();
            let value = self.parse_expression_until(";")?;
            Ok(Node::ReturnStatement {
                position,
                value: value.map(Box::new),
            })
        } else if self.cursor.lookahead("break", false)? {
            let position = self.cursor.line();
            let label = self.parse_expression_until(";")?;
            Ok(Node::BreakStatement {
                position,
                label: label.map(Box::new),
            })
        } else if self.cursor.lookahead("continue", false)? {
            let position = self.cursor.line();
            let label = self.parse_expression_until(";")?;
            Ok(Node::ContinueStatement {
                position,
                label: label.map(Box::new),
            })
        } else if self.declaration_incoming()? {
            let declaration = self.parse_declaration()?;
            self.parse_definition(declaration, false)
        } else {
            let position = self.cursor.line();
            let expression = self.parse_expression_until(";")?;
            Ok(Node::ExpressionStatement {
                position,
                expression: expression.map(Box::new),
            })
        }
    }

    /// Parse the body of a control statement or function.
    ///
    /// A `{` (or `should_be_block`, used by function definitions) yields a
    /// `BlockStatement`; otherwise an `InlineStatement` holding at most one
    /// statement, or none when the body is a bare `;`. Pending comments are
    /// flushed into the sequence at every statement boundary.
    pub(crate) fn parse_body(&mut self, should_be_block: bool) -> Result<Node, ParseError> {
        if self.cursor.curr() == b'{' || should_be_block {
            let position = self.cursor.line();
            self.cursor.consume("{")?;
            let mut body = self.cursor.take_comments();
            while self.cursor.curr() != 0 && self.cursor.curr() != b'}' {
                body.push(self.parse_statement()?);
                body.append(&mut self.cursor.take_comments());
            }
            self.cursor.consume("}")?;
            Ok(Node::BlockStatement { position, body })
        } else {
            let position = self.cursor.line();
            let mut body = self.cursor.take_comments();
            if !self.cursor.lookahead(";", false)? {
                body.push(self.parse_statement()?);
            }
            Ok(Node::InlineStatement { position, body })
        }
    }
}
