//! Declaration parsing implementation
//!
//! Declarations are the one place the grammar is not purely predictive by a
//! single character: whether `static unsigned x = 1;` is a declaration or an
//! expression is decided by [`Parser::declaration_incoming`], a non-consuming
//! probe over the dialect's modifier and type-name tables.
//!
//! # Grammar
//!
//! ```text
//! declaration ::= modifier* type_name identifier
//!               | modifier+ identifier          (last modifier is the type)
//! definition  ::= declaration ("[" expression? "]")* ("=" expression)? ";"
//! function    ::= declaration "(" parameters ")" (";" | block)
//! parameters  ::= (declaration ("," declaration)*)?
//! ```
//!
//! A definition followed by `,` continues a multi-declarator list: the comma
//! is spliced into the rendered type string so the next statement re-enters
//! this grammar with the shared type in front of the next identifier.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{DeclKind, Node, StorageScope, TypeSpec};
use crate::parser::parse::{ParseError, Parser};

/// A parsed `type identifier` pair, before context decides what node kind it
/// becomes (variable, array, function, parameter, typedef).
#[derive(Debug)]
pub(crate) struct Declaration {
    pub(crate) position: usize,
    pub(crate) ty: TypeSpec,
    pub(crate) identifier: Node,
}

impl Declaration {
    /// Wrap into a plain `Declaration` node of the given role.
    pub(crate) fn into_node(self, kind: DeclKind) -> Node {
        Node::Declaration {
            position: self.position,
            kind,
            ty: self.ty,
            identifier: Box::new(self.identifier),
        }
    }
}

impl Parser {
    /// True when a type modifier or known type name starts at the cursor.
    /// Consumes nothing.
    pub(crate) fn declaration_incoming(&mut self) -> Result<bool, ParseError> {
        let saved = self.cursor.checkpoint();
        for modifier in &self.dialect.type_modifiers {
            if self.cursor.lookahead(modifier, false)? {
                self.cursor.restore(saved);
                return Ok(true);
            }
        }
        for name in &self.dialect.type_names {
            if self.cursor.lookahead(name, false)? {
                self.cursor.restore(saved);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Parse `modifier* type_name identifier`. When no type name follows but
    /// at least one modifier was collected, the last modifier is promoted to
    /// the type name (`unsigned x;`).
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let type_position = self.cursor.line();
        let mut modifiers: Vec<String> = Vec::new();
        loop {
            let mut matched = false;
            for modifier in &self.dialect.type_modifiers {
                if self.cursor.lookahead(modifier, false)? {
                    modifiers.push(modifier.clone());
                    matched = true;
                }
            }
            if !matched {
                break;
            }
        }

        let mut type_name: Option<String> = None;
        for name in &self.dialect.type_names {
            if self.cursor.lookahead(name, false)? {
                type_name = Some(name.clone());
                break;
            }
        }

        let name = match type_name {
            Some(name) => name,
            None => match modifiers.pop() {
                Some(promoted) => promoted,
                None => return Err(self.cursor.unexpected("correct type name")),
            },
        };

        let ty = TypeSpec {
            position: type_position,
            modifiers,
            name,
        };
        let position = self.cursor.line();
        let identifier = self.parse_identifier(false)?;
        Ok(Declaration {
            position,
            ty,
            identifier,
        })
    }

    /// Continue a declaration into a variable or array
    /// declaration/definition: optional `[length]` brackets, an optional
    /// `=` initializer, and the terminating `;` or multi-declarator `,`.
    pub(crate) fn parse_definition(
        &mut self,
        declaration: Declaration,
        is_global: bool,
    ) -> Result<Node, ParseError> {
        let mut lengths: Vec<Option<Node>> = Vec::new();
        let mut is_array = false;
        while self.cursor.lookahead("[", false)? {
            is_array = true;
            if !self.cursor.lookahead("]", false)? {
                lengths.push(self.parse_expression()?);
                self.cursor.consume("]")?;
            } else {
                lengths.push(None);
            }
        }

        let defined = self.cursor.lookahead("=", false)?;
        let value = if defined {
            self.parse_expression()?.map(Box::new)
        } else {
            None
        };

        let scope = if is_global {
            StorageScope::Global
        } else {
            StorageScope::Local
        };

        if self.cursor.curr() == b',' {
            // Re-present the shared type for the next declarator.
            let mut rendered = String::new();
            for modifier in &declaration.ty.modifiers {
                rendered.push_str(modifier);
                rendered.push(' ');
            }
            rendered.push_str(&declaration.ty.name);
            self.cursor.splice_current(&rendered);
        } else {
            self.cursor.consume(";")?;
        }

        Ok(Node::Variable {
            position: declaration.position,
            scope,
            ty: declaration.ty,
            identifier: Box::new(declaration.identifier),
            lengths: if is_array { Some(lengths) } else { None },
            value,
            defined,
        })
    }

    /// Continue a declaration into a function declaration or definition; the
    /// opening `(` has been consumed by the caller.
    pub(crate) fn parse_function(&mut self, declaration: Declaration) -> Result<Node, ParseError> {
        let parameters = self.parse_parameters()?;
        if self.cursor.lookahead(";", false)? {
            Ok(Node::FunctionDeclaration {
                position: declaration.position,
                ty: declaration.ty,
                identifier: Box::new(declaration.identifier),
                parameters,
            })
        } else {
            let body = self.parse_body(true)?;
            Ok(Node::FunctionDefinition {
                position: declaration.position,
                ty: declaration.ty,
                identifier: Box::new(declaration.identifier),
                parameters,
                body: Box::new(body),
            })
        }
    }

    /// Parameter declarations up to `)`.
    pub(crate) fn parse_parameters(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut parameters = Vec::new();
        while self.declaration_incoming()? {
            let declaration = self.parse_declaration()?;
            parameters.push(declaration.into_node(DeclKind::Parameter));
            if self.cursor.lookahead(")", false)? {
                return Ok(parameters);
            }
            self.cursor.consume(",")?;
        }
        self.cursor.consume(")")?;
        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaring(source: &str) -> Parser {
        let mut parser = Parser::new(source);
        parser.cursor.prime().expect("prime failed");
        parser
    }

    #[test]
    fn probe_sees_modifiers_and_type_names_without_moving() {
        let mut parser = declaring("const x");
        assert!(parser.declaration_incoming().unwrap());
        assert_eq!(parser.cursor.curr(), b'c');

        let mut parser = declaring("int x");
        assert!(parser.declaration_incoming().unwrap());
        assert_eq!(parser.cursor.curr(), b'i');

        let mut parser = declaring("x = 1");
        assert!(!parser.declaration_incoming().unwrap());
    }

    #[test]
    fn probe_respects_word_boundaries() {
        let mut parser = declaring("integer = 1;");
        assert!(!parser.declaration_incoming().unwrap());
    }

    #[test]
    fn modifiers_accumulate_before_type_name() {
        let declaration = declaring("static const int x").parse_declaration().unwrap();
        assert_eq!(declaration.ty.name, "int");
        assert_eq!(declaration.ty.modifiers, vec!["static", "const"]);
        assert_eq!(declaration.identifier.identifier_name(), Some("x"));
    }

    #[test]
    fn last_modifier_promotes_to_type_name() {
        let declaration = declaring("unsigned long x").parse_declaration().unwrap();
        assert_eq!(declaration.ty.name, "long");
        assert_eq!(declaration.ty.modifiers, vec!["unsigned"]);
    }

    #[test]
    fn missing_type_name_is_reported() {
        let err = declaring("42;").parse_declaration().unwrap_err();
        assert_eq!(err.to_string(), "Line number 1: Expect correct type name");
    }
}
