//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type, and
//! the top-level parse entry point, including the two preprocessor forms the
//! dialect recognizes (`#include`, `#define`) and `typedef` registration.
//!
//! # Parser Architecture
//!
//! The parser is tokenless: grammar decisions are made by character
//! look-ahead through the [`Cursor`](crate::parser::cursor), never over a
//! token stream. Methods are split across multiple files using `impl Parser`
//! blocks:
//! - This module: Parser struct, error type, and the top-level program loop
//! - `literals`: identifier, number, char, string, and escape readers
//! - `declarations`: declarations, definitions, functions, parameters
//! - `statements`: statement dispatch and bodies
//! - `expressions`: precedence climbing and primaries
//!
//! The first failure aborts the parse; there is no recovery and no error
//! node. The caller gets either a complete `Program` or one line-annotated
//! error.

use thiserror::Error;

use crate::parser::ast::{DeclKind, Node};
use crate::parser::config::Dialect;
use crate::parser::cursor::{bytes_to_string, Cursor};

/// Parse failure. The parser never recovers: the first error is the result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required construct did not appear at the cursor.
    #[error("Line number {line}: Expect {expected}")]
    Unexpected { line: usize, expected: String },
    /// A recognized but unimplemented top-level construct.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

/// Recursive descent parser for the C dialect.
///
/// Single use: parsing consumes the parser, because the multi-declarator
/// rewrite mutates the owned source buffer.
pub struct Parser {
    pub(crate) cursor: Cursor,
    pub(crate) dialect: Dialect,
}

impl Parser {
    /// Parser over `source` with the default C dialect tables.
    pub fn new(source: &str) -> Self {
        Self::with_dialect(source, Dialect::default())
    }

    /// Parser with a caller-provided dialect (custom operators, modifiers,
    /// type names, escapes).
    pub fn with_dialect(source: &str, dialect: Dialect) -> Self {
        Parser {
            cursor: Cursor::new(source),
            dialect,
        }
    }

    /// Parse the whole input into a `Program` node.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        self.cursor.prime()?;
        let mut body: Vec<Node> = Vec::new();
        while !self.cursor.at_end() {
            self.cursor.skip_spaces()?;
            body.append(&mut self.cursor.take_comments());

            if self.cursor.lookahead("#include", false)? {
                body.push(self.parse_include()?);
            } else if self.cursor.lookahead("#define", false)? {
                body.push(self.parse_predefine()?);
            } else if self.declaration_incoming()? {
                let declaration = self.parse_declaration()?;
                if self.cursor.lookahead("(", false)? {
                    body.push(self.parse_function(declaration)?);
                } else {
                    body.push(self.parse_definition(declaration, true)?);
                }
            } else if self.cursor.lookahead("typedef", false)? {
                let declaration = self.parse_declaration()?;
                if let Some(name) = declaration.identifier.identifier_name() {
                    self.dialect.type_names.push(name.to_string());
                }
                self.cursor.consume(";")?;
                body.push(declaration.into_node(DeclKind::Typedef));
            } else if self.cursor.lookahead("struct", false)? {
                return Err(ParseError::Unsupported("struct"));
            } else if self.cursor.lookahead("enum", false)? {
                return Err(ParseError::Unsupported("enum"));
            } else {
                return Err(self.cursor.unexpected("definition"));
            }

            body.append(&mut self.cursor.take_comments());
            self.cursor.skip_spaces()?;
        }
        Ok(Node::Program { body })
    }

    /// Parse the target of an `#include`, delimiters included in the stored
    /// file string (`<stdio.h>` or `"local.h"`).
    fn parse_include(&mut self) -> Result<Node, ParseError> {
        let position = self.cursor.line();
        let mut file = Vec::new();
        if self.cursor.curr() == b'<' {
            while self.cursor.curr() != 0 && self.cursor.curr() != b'>' {
                file.push(self.cursor.curr());
                self.cursor.next(true, false)?;
            }
        } else if self.cursor.curr() == b'"' {
            loop {
                file.push(self.cursor.curr());
                self.cursor.next(true, false)?;
                if self.cursor.curr() == 0 || self.cursor.curr() == b'"' {
                    break;
                }
            }
        } else {
            return Err(self.cursor.unexpected("\" or <"));
        }
        file.push(self.cursor.curr());
        self.cursor.next(true, false)?;
        Ok(Node::IncludeStatement {
            position,
            file: bytes_to_string(file),
        })
    }

    /// Parse a `#define`: an identifier, an optional parenthesized argument
    /// list, and a value expression. A parameterized define requires its
    /// value to start with `(`.
    fn parse_predefine(&mut self) -> Result<Node, ParseError> {
        let position = self.cursor.line();
        let identifier = self.parse_identifier(false)?;
        let mut arguments: Option<Vec<Option<Node>>> = None;
        if self.cursor.lookahead("(", false)? {
            arguments = Some(self.parse_call_arguments()?);
        }
        if arguments.is_some() && self.cursor.curr() != b'(' {
            return Err(self.cursor.unexpected("("));
        }
        let value = self.parse_expression()?;
        Ok(Node::PredefineStatement {
            position,
            identifier: Box::new(identifier),
            arguments,
            value: value.map(Box::new),
        })
    }
}
