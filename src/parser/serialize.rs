//! JSON serialization of the syntax tree
//!
//! Downstream consumers (pretty-printers, translators, analyzers) work with
//! a JSON rendition of the tree. Every node serializes as an object with its
//! `kind` and `position` plus kind-specific payload fields; optional slots
//! the grammar left empty serialize as `null`. `length` appears only on
//! array declarations/definitions and `value` only on definitions.

use serde_json::{json, Value};

use crate::parser::ast::{Node, TypeSpec};

fn optional(node: &Option<Box<Node>>) -> Value {
    match node {
        Some(node) => node.to_json(),
        None => Value::Null,
    }
}

fn sequence(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(Node::to_json).collect())
}

fn holey_sequence(nodes: &[Option<Node>]) -> Value {
    Value::Array(
        nodes
            .iter()
            .map(|node| match node {
                Some(node) => node.to_json(),
                None => Value::Null,
            })
            .collect(),
    )
}

impl TypeSpec {
    pub fn to_json(&self) -> Value {
        json!({
            "kind": "Type",
            "position": self.position,
            "name": self.name,
            "modifiers": self.modifiers,
        })
    }
}

impl Node {
    /// Serialize this node and its children.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Program { body } => json!({
                "kind": self.kind(),
                "position": self.position(),
                "body": sequence(body),
            }),
            Node::IncludeStatement { position, file } => json!({
                "kind": self.kind(),
                "position": position,
                "file": file,
            }),
            Node::PredefineStatement {
                position,
                identifier,
                arguments,
                value,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "identifier": identifier.to_json(),
                "arguments": match arguments {
                    Some(arguments) => holey_sequence(arguments),
                    None => Value::Null,
                },
                "value": optional(value),
            }),
            Node::Declaration {
                position,
                ty,
                identifier,
                ..
            } => json!({
                "kind": self.kind(),
                "position": position,
                "identifier": identifier.to_json(),
                "type": ty.to_json(),
            }),
            Node::FunctionDeclaration {
                position,
                ty,
                identifier,
                parameters,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "identifier": identifier.to_json(),
                "type": ty.to_json(),
                "parameters": sequence(parameters),
            }),
            Node::FunctionDefinition {
                position,
                ty,
                identifier,
                parameters,
                body,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "identifier": identifier.to_json(),
                "type": ty.to_json(),
                "parameters": sequence(parameters),
                "body": body.to_json(),
            }),
            Node::Variable {
                position,
                ty,
                identifier,
                lengths,
                value,
                defined,
                ..
            } => {
                let mut object = json!({
                    "kind": self.kind(),
                    "position": position,
                    "identifier": identifier.to_json(),
                    "type": ty.to_json(),
                });
                if let Some(lengths) = lengths {
                    object["length"] = holey_sequence(lengths);
                }
                if *defined {
                    object["value"] = optional(value);
                }
                object
            }
            Node::IfStatement {
                position,
                condition,
                body,
                else_body,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "condition": condition.to_json(),
                "body": body.to_json(),
                "elseBody": optional(else_body),
            }),
            Node::WhileStatement {
                position,
                condition,
                body,
            }
            | Node::DoWhileStatement {
                position,
                condition,
                body,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "condition": condition.to_json(),
                "body": body.to_json(),
            }),
            Node::ForStatement {
                position,
                init,
                condition,
                step,
                body,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "init": init.to_json(),
                "condition": optional(condition),
                "step": optional(step),
                "body": body.to_json(),
            }),
            Node::ReturnStatement { position, value } => json!({
                "kind": self.kind(),
                "position": position,
                "value": optional(value),
            }),
            Node::BreakStatement { position, label }
            | Node::ContinueStatement { position, label } => json!({
                "kind": self.kind(),
                "position": position,
                "label": optional(label),
            }),
            Node::ExpressionStatement {
                position,
                expression,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "expression": optional(expression),
            }),
            Node::BlockStatement { position, body }
            | Node::InlineStatement { position, body } => json!({
                "kind": self.kind(),
                "position": position,
                "body": sequence(body),
            }),
            Node::BinaryExpression {
                position,
                op,
                left,
                right,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "op": op,
                "left": optional(left),
                "right": right.to_json(),
            }),
            Node::IndexExpression {
                position,
                array,
                indexes,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "array": optional(array),
                "indexes": holey_sequence(indexes),
            }),
            Node::CallExpression {
                position,
                callee,
                arguments,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "callee": callee.to_json(),
                "arguments": holey_sequence(arguments),
            }),
            Node::ParenthesesExpression {
                position,
                expression,
            } => json!({
                "kind": self.kind(),
                "position": position,
                "expression": optional(expression),
            }),
            Node::Identifier { position, name } => json!({
                "kind": self.kind(),
                "position": position,
                "name": name,
            }),
            Node::NumberLiteral {
                position, value, ..
            }
            | Node::CharLiteral { position, value }
            | Node::StringLiteral { position, value } => json!({
                "kind": self.kind(),
                "position": position,
                "value": value,
            }),
            Node::ArrayLiteral { position, value } => json!({
                "kind": self.kind(),
                "position": position,
                "value": holey_sequence(value),
            }),
            Node::BlockComment { position, content }
            | Node::InlineComment { position, content } => json!({
                "kind": self.kind(),
                "position": position,
                "content": content,
            }),
        }
    }
}
