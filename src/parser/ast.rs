// Syntax tree definitions for the C-dialect parser

/// Storage context of a variable or array declaration.
///
/// The context only changes the node's `kind` string: top-level items gain a
/// `Global` prefix, `for` initializers a `For` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    Local,
    Global,
    For,
}

/// Role of a plain `Declaration` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Declaration,
    Parameter,
    Typedef,
}

/// Base classification of a number literal before suffixes are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFlavor {
    Decimal,
    Float,
    Hex,
    Oct,
}

/// Type annotation attached to declarations: a type name plus the qualifier
/// keywords that preceded it. Serializes as a node of kind `"Type"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub position: usize,
    pub modifiers: Vec<String>,
    pub name: String,
}

/// A node of the syntax tree.
///
/// Every variant carries a 1-based source line in `position`. Optional slots
/// (`else` bodies, `for` clauses, return values, labels) are `None` when the
/// grammar produced nothing there; sequence slots that may hold holes (call
/// arguments, array lengths, array-literal entries) use `Option` elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program {
        body: Vec<Node>,
    },

    // Top-level items
    IncludeStatement {
        position: usize,
        file: String,
    },
    PredefineStatement {
        position: usize,
        identifier: Box<Node>,
        arguments: Option<Vec<Option<Node>>>,
        value: Option<Box<Node>>,
    },
    Declaration {
        position: usize,
        kind: DeclKind,
        ty: TypeSpec,
        identifier: Box<Node>,
    },
    FunctionDeclaration {
        position: usize,
        ty: TypeSpec,
        identifier: Box<Node>,
        parameters: Vec<Node>,
    },
    FunctionDefinition {
        position: usize,
        ty: TypeSpec,
        identifier: Box<Node>,
        parameters: Vec<Node>,
        body: Box<Node>,
    },
    /// Variable or array declaration/definition. `lengths` is `Some` for
    /// arrays (one entry per `[...]`, `None` entries for unsized brackets);
    /// `defined` marks an `=` initializer, whose expression sits in `value`.
    Variable {
        position: usize,
        scope: StorageScope,
        ty: TypeSpec,
        identifier: Box<Node>,
        lengths: Option<Vec<Option<Node>>>,
        value: Option<Box<Node>>,
        defined: bool,
    },

    // Statements
    IfStatement {
        position: usize,
        condition: Box<Node>,
        body: Box<Node>,
        else_body: Option<Box<Node>>,
    },
    WhileStatement {
        position: usize,
        condition: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        position: usize,
        condition: Box<Node>,
        body: Box<Node>,
    },
    ForStatement {
        position: usize,
        init: Box<Node>,
        condition: Option<Box<Node>>,
        step: Option<Box<Node>>,
        body: Box<Node>,
    },
    ReturnStatement {
        position: usize,
        value: Option<Box<Node>>,
    },
    BreakStatement {
        position: usize,
        label: Option<Box<Node>>,
    },
    ContinueStatement {
        position: usize,
        label: Option<Box<Node>>,
    },
    ExpressionStatement {
        position: usize,
        expression: Option<Box<Node>>,
    },
    BlockStatement {
        position: usize,
        body: Vec<Node>,
    },
    /// Brace-less body of a control statement: at most one statement plus any
    /// comments flushed at the boundary.
    InlineStatement {
        position: usize,
        body: Vec<Node>,
    },

    // Expressions
    BinaryExpression {
        position: usize,
        op: String,
        left: Option<Box<Node>>,
        right: Box<Node>,
    },
    IndexExpression {
        position: usize,
        array: Option<Box<Node>>,
        indexes: Vec<Option<Node>>,
    },
    CallExpression {
        position: usize,
        callee: Box<Node>,
        arguments: Vec<Option<Node>>,
    },
    ParenthesesExpression {
        position: usize,
        expression: Option<Box<Node>>,
    },
    Identifier {
        position: usize,
        name: String,
    },

    // Literals
    NumberLiteral {
        position: usize,
        flavor: NumberFlavor,
        is_long: bool,
        is_unsigned: bool,
        value: String,
    },
    CharLiteral {
        position: usize,
        value: String,
    },
    StringLiteral {
        position: usize,
        value: String,
    },
    ArrayLiteral {
        position: usize,
        value: Vec<Option<Node>>,
    },

    // Comments
    BlockComment {
        position: usize,
        content: String,
    },
    InlineComment {
        position: usize,
        content: String,
    },
}

impl Node {
    /// The discriminant string this node serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::IncludeStatement { .. } => "IncludeStatement",
            Node::PredefineStatement { .. } => "PredefineStatement",
            Node::Declaration { kind, .. } => match kind {
                DeclKind::Declaration => "Declaration",
                DeclKind::Parameter => "ParameterDeclaration",
                DeclKind::Typedef => "TypeDefinition",
            },
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
            Node::FunctionDefinition { .. } => "FunctionDefinition",
            Node::Variable {
                scope,
                lengths,
                defined,
                ..
            } => match (scope, lengths.is_some(), defined) {
                (StorageScope::Local, false, false) => "VariableDeclaration",
                (StorageScope::Local, false, true) => "VariableDefinition",
                (StorageScope::Local, true, false) => "ArrayDeclaration",
                (StorageScope::Local, true, true) => "ArrayDefinition",
                (StorageScope::Global, false, false) => "GlobalVariableDeclaration",
                (StorageScope::Global, false, true) => "GlobalVariableDefinition",
                (StorageScope::Global, true, false) => "GlobalArrayDeclaration",
                (StorageScope::Global, true, true) => "GlobalArrayDefinition",
                (StorageScope::For, false, false) => "ForVariableDeclaration",
                (StorageScope::For, false, true) => "ForVariableDefinition",
                (StorageScope::For, true, false) => "ForArrayDeclaration",
                (StorageScope::For, true, true) => "ForArrayDefinition",
            },
            Node::IfStatement { .. } => "IfStatement",
            Node::WhileStatement { .. } => "WhileStatement",
            Node::DoWhileStatement { .. } => "DoWhileStatement",
            Node::ForStatement { .. } => "ForStatement",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::BreakStatement { .. } => "BreakStatement",
            Node::ContinueStatement { .. } => "ContinueStatement",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::BlockStatement { .. } => "BlockStatement",
            Node::InlineStatement { .. } => "InlineStatement",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::IndexExpression { .. } => "IndexExpression",
            Node::CallExpression { .. } => "CallExpression",
            Node::ParenthesesExpression { .. } => "ParenthesesExpression",
            Node::Identifier { .. } => "Identifier",
            Node::NumberLiteral {
                flavor,
                is_long,
                is_unsigned,
                ..
            } => match (is_unsigned, is_long, flavor) {
                (false, false, NumberFlavor::Decimal) => "NumberLiteral",
                (false, false, NumberFlavor::Float) => "FloatNumberLiteral",
                (false, false, NumberFlavor::Hex) => "HexNumberLiteral",
                (false, false, NumberFlavor::Oct) => "OctNumberLiteral",
                (false, true, NumberFlavor::Decimal) => "LongNumberLiteral",
                (false, true, NumberFlavor::Float) => "LongFloatNumberLiteral",
                (false, true, NumberFlavor::Hex) => "LongHexNumberLiteral",
                (false, true, NumberFlavor::Oct) => "LongOctNumberLiteral",
                (true, false, NumberFlavor::Decimal) => "UnsignedNumberLiteral",
                (true, false, NumberFlavor::Float) => "UnsignedFloatNumberLiteral",
                (true, false, NumberFlavor::Hex) => "UnsignedHexNumberLiteral",
                (true, false, NumberFlavor::Oct) => "UnsignedOctNumberLiteral",
                (true, true, NumberFlavor::Decimal) => "UnsignedLongNumberLiteral",
                (true, true, NumberFlavor::Float) => "UnsignedLongFloatNumberLiteral",
                (true, true, NumberFlavor::Hex) => "UnsignedLongHexNumberLiteral",
                (true, true, NumberFlavor::Oct) => "UnsignedLongOctNumberLiteral",
            },
            Node::CharLiteral { .. } => "CharLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::ArrayLiteral { .. } => "ArrayLiteral",
            Node::BlockComment { .. } => "BlockComment",
            Node::InlineComment { .. } => "InlineComment",
        }
    }

    /// 1-based source line the node starts on. `Program` is pinned to 1.
    pub fn position(&self) -> usize {
        match self {
            Node::Program { .. } => 1,
            Node::IncludeStatement { position, .. }
            | Node::PredefineStatement { position, .. }
            | Node::Declaration { position, .. }
            | Node::FunctionDeclaration { position, .. }
            | Node::FunctionDefinition { position, .. }
            | Node::Variable { position, .. }
            | Node::IfStatement { position, .. }
            | Node::WhileStatement { position, .. }
            | Node::DoWhileStatement { position, .. }
            | Node::ForStatement { position, .. }
            | Node::ReturnStatement { position, .. }
            | Node::BreakStatement { position, .. }
            | Node::ContinueStatement { position, .. }
            | Node::ExpressionStatement { position, .. }
            | Node::BlockStatement { position, .. }
            | Node::InlineStatement { position, .. }
            | Node::BinaryExpression { position, .. }
            | Node::IndexExpression { position, .. }
            | Node::CallExpression { position, .. }
            | Node::ParenthesesExpression { position, .. }
            | Node::Identifier { position, .. }
            | Node::NumberLiteral { position, .. }
            | Node::CharLiteral { position, .. }
            | Node::StringLiteral { position, .. }
            | Node::ArrayLiteral { position, .. }
            | Node::BlockComment { position, .. }
            | Node::InlineComment { position, .. } => *position,
        }
    }

    /// Name of the identifier node, if this is one.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Node::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }
}
