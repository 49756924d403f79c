// End-to-end parser tests: golden JSON trees, comment interleaving, and
// operator-table properties.

use ctree::{parse, Dialect, Node, Parser};
use serde_json::{json, Value};

/// Parse a source wrapped as `void f() { <stmt> }` and return the first
/// statement of the function body.
fn first_statement(source: &str) -> Node {
    let program = parse(source).expect("parse failed");
    let mut body = match program {
        Node::Program { body } => body,
        other => panic!("expected program, got {:?}", other),
    };
    let function = body.remove(0);
    let block = match function {
        Node::FunctionDefinition { body, .. } => *body,
        other => panic!("expected function definition, got {:?}", other),
    };
    match block {
        Node::BlockStatement { mut body, .. } => body.remove(0),
        other => panic!("expected block, got {:?}", other),
    }
}

/// The expression of the first statement of `void f() { ... }`.
fn first_expression(source: &str) -> Node {
    match first_statement(source) {
        Node::ExpressionStatement {
            expression: Some(expression),
            ..
        } => *expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Walk a serialized tree checking the universal node invariants: every
/// object is a node with a non-empty `kind` and a `position` of at least 1.
fn check_node_invariants(value: &Value) {
    match value {
        Value::Object(fields) => {
            let kind = fields
                .get("kind")
                .and_then(Value::as_str)
                .expect("node object without kind");
            assert!(!kind.is_empty(), "empty kind");
            let position = fields
                .get("position")
                .and_then(Value::as_u64)
                .expect("node object without position");
            assert!(position >= 1, "position {} < 1 on {}", position, kind);
            for child in fields.values() {
                check_node_invariants(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                check_node_invariants(item);
            }
        }
        _ => {}
    }
}

// === Golden trees ===

#[test]
fn global_declaration_tree() {
    let program = parse("int x;").expect("parse failed");
    assert_eq!(
        program.to_json(),
        json!({
            "kind": "Program",
            "position": 1,
            "body": [{
                "kind": "GlobalVariableDeclaration",
                "position": 1,
                "identifier": { "kind": "Identifier", "position": 1, "name": "x" },
                "type": { "kind": "Type", "position": 1, "name": "int", "modifiers": [] },
            }],
        })
    );
}

#[test]
fn function_definition_tree() {
    let program = parse("int main() { return 0; }").expect("parse failed");
    assert_eq!(
        program.to_json(),
        json!({
            "kind": "Program",
            "position": 1,
            "body": [{
                "kind": "FunctionDefinition",
                "position": 1,
                "identifier": { "kind": "Identifier", "position": 1, "name": "main" },
                "type": { "kind": "Type", "position": 1, "name": "int", "modifiers": [] },
                "parameters": [],
                "body": {
                    "kind": "BlockStatement",
                    "position": 1,
                    "body": [{
                        "kind": "ReturnStatement",
                        "position": 1,
                        // A lone `0` reads as an octal literal, like in C.
                        "value": { "kind": "OctNumberLiteral", "position": 1, "value": "0" },
                    }],
                },
            }],
        })
    );
}

#[test]
fn global_definition_with_promoted_type_name() {
    let program = parse("unsigned long x = 1L;").expect("parse failed");
    assert_eq!(
        program.to_json(),
        json!({
            "kind": "Program",
            "position": 1,
            "body": [{
                "kind": "GlobalVariableDefinition",
                "position": 1,
                "identifier": { "kind": "Identifier", "position": 1, "name": "x" },
                "type": {
                    "kind": "Type",
                    "position": 1,
                    "name": "long",
                    "modifiers": ["unsigned"],
                },
                "value": { "kind": "LongNumberLiteral", "position": 1, "value": "1L" },
            }],
        })
    );
}

#[test]
fn if_else_with_inline_bodies() {
    let statement = first_statement("void f() { if (a) b(); else c(); }");
    let call = |name: &str| {
        json!({
            "kind": "ExpressionStatement",
            "position": 1,
            "expression": {
                "kind": "CallExpression",
                "position": 1,
                "callee": { "kind": "Identifier", "position": 1, "name": name },
                "arguments": [],
            },
        })
    };
    assert_eq!(
        statement.to_json(),
        json!({
            "kind": "IfStatement",
            "position": 1,
            "condition": { "kind": "Identifier", "position": 1, "name": "a" },
            "body": { "kind": "InlineStatement", "position": 1, "body": [call("b")] },
            "elseBody": { "kind": "InlineStatement", "position": 1, "body": [call("c")] },
        })
    );
}

#[test]
fn for_statement_tree() {
    let statement = first_statement("void f() { for (int i = 0; i < 10; i = i + 1) { } }");
    let identifier = |name: &str| json!({ "kind": "Identifier", "position": 1, "name": name });
    assert_eq!(
        statement.to_json(),
        json!({
            "kind": "ForStatement",
            "position": 1,
            "init": {
                "kind": "ForVariableDefinition",
                "position": 1,
                "identifier": identifier("i"),
                "type": { "kind": "Type", "position": 1, "name": "int", "modifiers": [] },
                "value": { "kind": "OctNumberLiteral", "position": 1, "value": "0" },
            },
            "condition": {
                "kind": "BinaryExpression",
                "position": 1,
                "op": "<",
                "left": identifier("i"),
                "right": { "kind": "NumberLiteral", "position": 1, "value": "10" },
            },
            "step": {
                "kind": "BinaryExpression",
                "position": 1,
                "op": "=",
                "left": identifier("i"),
                "right": {
                    "kind": "BinaryExpression",
                    "position": 1,
                    "op": "+",
                    "left": identifier("i"),
                    "right": { "kind": "NumberLiteral", "position": 1, "value": "1" },
                },
            },
            "body": { "kind": "BlockStatement", "position": 1, "body": [] },
        })
    );
}

#[test]
fn include_tree() {
    let program = parse("#include <stdio.h>").expect("parse failed");
    assert_eq!(
        program.to_json(),
        json!({
            "kind": "Program",
            "position": 1,
            "body": [{ "kind": "IncludeStatement", "position": 1, "file": "<stdio.h>" }],
        })
    );
}

#[test]
fn leading_comment_tree() {
    let program = parse("/* c */ int x;").expect("parse failed");
    let rendered = program.to_json();
    assert_eq!(
        rendered["body"][0],
        json!({ "kind": "BlockComment", "position": 1, "content": " c " })
    );
    assert_eq!(rendered["body"][1]["kind"], json!("GlobalVariableDeclaration"));
}

// === Comments ===

#[test]
fn comments_keep_source_order_at_statement_boundaries() {
    let source = "/* one */\nint x; // two\n/* three */ int y;\n";
    let program = parse(source).expect("parse failed");
    let body = match program {
        Node::Program { body } => body,
        other => panic!("expected program, got {:?}", other),
    };
    let summary: Vec<(&str, usize)> = body
        .iter()
        .map(|node| (node.kind(), node.position()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("BlockComment", 1),
            ("GlobalVariableDeclaration", 2),
            ("InlineComment", 2),
            ("BlockComment", 3),
            ("GlobalVariableDeclaration", 3),
        ]
    );
}

#[test]
fn comments_flush_into_block_bodies() {
    let source = "int f() {\n  // note\n  return 1;\n}\n";
    let program = parse(source).expect("parse failed");
    let rendered = program.to_json();
    let block = &rendered["body"][0]["body"];
    assert_eq!(
        block["body"][0],
        json!({ "kind": "InlineComment", "position": 2, "content": " note" })
    );
    assert_eq!(block["body"][1]["kind"], json!("ReturnStatement"));
}

#[test]
fn comment_between_type_and_identifier_is_captured_once() {
    let program = parse("int /* c */ x;").expect("parse failed");
    let body = match program {
        Node::Program { body } => body,
        other => panic!("expected program, got {:?}", other),
    };
    let comments = body
        .iter()
        .filter(|node| node.kind() == "BlockComment")
        .count();
    assert_eq!(comments, 1);
}

// === Declarations and definitions ===

#[test]
fn typedef_then_use() {
    let program = parse("typedef unsigned u32;\nu32 x;").expect("parse failed");
    let rendered = program.to_json();
    assert_eq!(rendered["body"][0]["kind"], json!("TypeDefinition"));
    assert_eq!(rendered["body"][1]["kind"], json!("GlobalVariableDeclaration"));
    assert_eq!(rendered["body"][1]["type"]["name"], json!("u32"));
}

#[test]
fn array_declaration_and_definition() {
    let program = parse("int a[3];\nint b[] = {1, 2};\nint m[2][2];").expect("parse failed");
    let rendered = program.to_json();

    assert_eq!(rendered["body"][0]["kind"], json!("GlobalArrayDeclaration"));
    assert_eq!(rendered["body"][0]["length"][0]["value"], json!("3"));

    assert_eq!(rendered["body"][1]["kind"], json!("GlobalArrayDefinition"));
    assert_eq!(rendered["body"][1]["length"][0], Value::Null);
    assert_eq!(rendered["body"][1]["value"]["kind"], json!("ArrayLiteral"));
    assert_eq!(
        rendered["body"][1]["value"]["value"][1]["value"],
        json!("2")
    );

    assert_eq!(rendered["body"][2]["kind"], json!("GlobalArrayDeclaration"));
    assert_eq!(rendered["body"][2]["position"], json!(3));
}

#[test]
fn local_declarations_inside_functions() {
    let statement = first_statement("void f() { const int x = 1; }");
    assert_eq!(statement.kind(), "VariableDefinition");
    let statement = first_statement("void f() { int x; }");
    assert_eq!(statement.kind(), "VariableDeclaration");
}

// === Statements ===

#[test]
fn do_while_statement() {
    let statement = first_statement("void f() { do x = x + 1; while (x < 10); }");
    let rendered = statement.to_json();
    assert_eq!(rendered["kind"], json!("DoWhileStatement"));
    assert_eq!(rendered["body"]["kind"], json!("InlineStatement"));
    assert_eq!(rendered["condition"]["op"], json!("<"));
}

#[test]
fn break_and_continue_without_labels() {
    let statement = first_statement("void f() { while (1) { break; continue; } }");
    let rendered = statement.to_json();
    assert_eq!(rendered["body"]["body"][0]["kind"], json!("BreakStatement"));
    assert_eq!(rendered["body"]["body"][0]["label"], Value::Null);
    assert_eq!(rendered["body"]["body"][1]["kind"], json!("ContinueStatement"));
}

#[test]
fn empty_inline_body_is_allowed() {
    let statement = first_statement("void f() { if (a); }");
    let rendered = statement.to_json();
    assert_eq!(rendered["body"]["kind"], json!("InlineStatement"));
    assert_eq!(rendered["body"]["body"], json!([]));
    assert_eq!(rendered["elseBody"], Value::Null);
}

#[test]
fn keyword_prefix_identifiers_are_not_keywords() {
    let statement = first_statement("void f() { iffy(); }");
    let rendered = statement.to_json();
    assert_eq!(rendered["kind"], json!("ExpressionStatement"));
    assert_eq!(
        rendered["expression"]["callee"]["name"],
        json!("iffy")
    );

    let statement = first_statement("void f() { double x; }");
    assert_eq!(statement.kind(), "VariableDeclaration");
}

// === Literals ===

#[test]
fn number_literal_classification() {
    let cases = [
        ("1", "NumberLiteral"),
        ("0", "OctNumberLiteral"),
        ("010", "OctNumberLiteral"),
        ("3.5", "FloatNumberLiteral"),
        ("0.5", "FloatNumberLiteral"),
        ("2e10", "NumberLiteral"),
        ("1l", "LongNumberLiteral"),
        ("1lu", "UnsignedLongNumberLiteral"),
        ("0x1F", "HexNumberLiteral"),
        ("-7", "NumberLiteral"),
        ("-0x2a", "HexNumberLiteral"),
    ];
    for (literal, kind) in cases {
        let source = format!("void f() {{ x = {literal}; }}", literal = literal);
        let expression = first_expression(&source);
        let rendered = expression.to_json();
        assert_eq!(rendered["op"], json!("="), "source {:?}", literal);
        assert_eq!(rendered["right"]["kind"], json!(kind), "source {:?}", literal);
        assert_eq!(rendered["right"]["value"], json!(literal), "source {:?}", literal);
    }
}

#[test]
fn char_and_string_literals() {
    let expression = first_expression("void f() { x = 'a'; }");
    assert_eq!(
        expression.to_json(),
        json!({
            "kind": "BinaryExpression",
            "position": 1,
            "op": "=",
            "left": { "kind": "Identifier", "position": 1, "name": "x" },
            "right": { "kind": "CharLiteral", "position": 1, "value": "a" },
        })
    );

    let expression = first_expression("void f() { x = '\\n'; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["right"]["value"], json!("\\n"));

    let expression = first_expression("void f() { x = \"hi\\x21\"; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["right"]["kind"], json!("StringLiteral"));
    assert_eq!(rendered["right"]["value"], json!("hi!"));
}

// === Operator table properties ===

#[test]
fn longest_match_wins_over_prefix_operators() {
    let expression = first_expression("void f() { a << b; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["op"], json!("<<"));

    let expression = first_expression("void f() { a <<= b; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["op"], json!("<<="));
}

#[test]
fn custom_operator_table_scans_longest_first() {
    let mut dialect = Dialect::default();
    dialect.operators = vec!["xy".to_string(), "x".to_string()];
    dialect.precedence.insert("xy".to_string(), 5);
    dialect.precedence.insert("x".to_string(), 5);

    let program = Parser::with_dialect("void f() { a xy b; }", dialect)
        .parse()
        .expect("parse failed");
    let rendered = program.to_json();
    let expression = &rendered["body"][0]["body"]["body"][0]["expression"];
    assert_eq!(expression["op"], json!("xy"));
    assert_eq!(expression["left"]["name"], json!("a"));
    assert_eq!(expression["right"]["name"], json!("b"));
}

fn render_expression(node: &Node) -> String {
    match node {
        Node::Identifier { name, .. } => name.clone(),
        Node::NumberLiteral { value, .. } => value.clone(),
        Node::BinaryExpression {
            op, left, right, ..
        } => {
            let left = left
                .as_ref()
                .map(|node| render_expression(node))
                .unwrap_or_default();
            format!("{} {} {}", left, op, render_expression(right))
        }
        other => panic!("unexpected node in rendered expression: {:?}", other),
    }
}

#[test]
fn operator_pairs_round_trip() {
    let dialect = Dialect::default();
    for op1 in &dialect.operators {
        for op2 in &dialect.operators {
            let source = format!("void f() {{ a {} b {} c; }}", op1, op2);
            let tree = first_expression(&source);
            let rendered = format!("void f() {{ {}; }}", render_expression(&tree));
            let reparsed = first_expression(&rendered);
            assert_eq!(tree, reparsed, "round-trip failed for {:?} {:?}", op1, op2);
        }
    }
}

#[test]
fn equal_precedence_groups_left() {
    let expression = first_expression("void f() { a - b - c; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["op"], json!("-"));
    assert_eq!(rendered["right"]["name"], json!("c"));
    assert_eq!(rendered["left"]["op"], json!("-"));

    // Assignment chains group left too; this dialect has no right
    // associativity.
    let expression = first_expression("void f() { a = b = c; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["right"]["name"], json!("c"));
    assert_eq!(rendered["left"]["op"], json!("="));
}

#[test]
fn climbed_runs_absorb_equal_precedence_to_the_left() {
    // The climb recurses with the look-ahead operator's own level, so the
    // `*` run groups left inside the climbed call.
    let expression = first_expression("void f() { a + b * c * d; }");
    let rendered = expression.to_json();
    assert_eq!(rendered["op"], json!("+"));
    assert_eq!(rendered["right"]["op"], json!("*"));
    assert_eq!(rendered["right"]["right"]["name"], json!("d"));
    assert_eq!(rendered["right"]["left"]["op"], json!("*"));
    assert_eq!(rendered["right"]["left"]["left"]["name"], json!("b"));
}

// === Invariants ===

#[test]
fn every_node_has_kind_and_position() {
    let source = "\
#include <stdio.h>
#define LIMIT 10

/* totals */
typedef unsigned u32;
u32 total = 0;
int history[LIMIT];

int accumulate(int amount) {
    // clamp at the limit
    if (amount > LIMIT) amount = LIMIT;
    for (int i = 0; i < amount; i = i + 1) {
        total = total + history[i];
    }
    do total = total - 1; while (total > 100);
    while (total) break;
    return total;
}
";
    let program = parse(source).expect("parse failed");
    check_node_invariants(&program.to_json());
}

#[test]
fn positions_track_lines() {
    let program = parse("int a;\nint b;\n\nint c;\n").expect("parse failed");
    let body = match program {
        Node::Program { body } => body,
        other => panic!("expected program, got {:?}", other),
    };
    let positions: Vec<usize> = body.iter().map(Node::position).collect();
    assert_eq!(positions, vec![1, 2, 4]);
}

// === Errors ===

#[test]
fn error_messages_carry_line_numbers() {
    let err = parse("int x =\n  @;").unwrap_err();
    assert_eq!(err.to_string(), "Line number 2: Expect ;");
}

#[test]
fn if_requires_a_condition() {
    let err = parse("void f() { if () x; }").unwrap_err();
    assert_eq!(err.to_string(), "Line number 1: Expect if condition");
}

#[test]
fn if_rejects_else_as_body() {
    let err = parse("void f() { if (a) else b(); }").unwrap_err();
    assert_eq!(err.to_string(), "Line number 1: Expect if body statement");
}

#[test]
fn binary_operator_requires_right_operand() {
    let err = parse("void f() { a + ; }").unwrap_err();
    assert_eq!(err.to_string(), "Line number 1: Expect right value");
}
