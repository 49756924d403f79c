//! C-dialect source parser
//!
//! This module transforms source text of a restricted C dialect into a tagged
//! syntax tree:
//! - [`cursor`]: character cursor with whitespace/comment elision and
//!   look-ahead
//! - [`config`]: dialect tables (modifiers, type names, operators, escapes)
//! - [`ast`]: tree node definitions
//! - [`parse`]: the [`Parser`](parse::Parser) itself, with its grammar spread
//!   over [`literals`], [`declarations`], [`statements`], and [`expressions`]
//! - [`serialize`]: JSON rendition of the tree
//!
//! # Supported dialect
//!
//! - Top level: `#include`, `#define`, global variable/array
//!   declarations and definitions, function declarations and definitions,
//!   `typedef` (registering the new name); `struct` and `enum` are rejected
//! - Statements: `if`/`else`, `while`, `do`-`while`, `for`, `return`,
//!   `break`, `continue`, declarations, expression statements
//! - Expressions: binary operators by precedence climbing, index
//!   subscripts, calls, parenthesized expressions, number/char/string/array
//!   literals
//! - Comments are captured as tree nodes, not discarded
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over characters; there is no token stream.
//! Constructs are distinguished purely by restoring look-ahead, and the
//! binary-operator table is scanned longest-first for correct tokenization.

pub mod ast;
pub mod config;
pub mod cursor;
pub mod declarations;
pub mod expressions;
pub mod literals;
pub mod parse;
pub mod serialize;
pub mod statements;
