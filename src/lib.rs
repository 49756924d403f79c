//! # Introduction
//!
//! `ctree` parses a restricted C dialect into a tagged syntax tree suitable
//! for downstream consumers (pretty-printers, translators, analyzers).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Cursor → Parser → Node tree → JSON
//! ```
//!
//! The parser is tokenless: a character [`cursor`](parser::cursor) interleaves
//! whitespace skipping, line tracking, and comment capture with the grammar's
//! look-ahead, and binary expressions are parsed by precedence climbing over
//! a configurable operator table.
//!
//! ## Contract
//!
//! Given a source string, [`parse`] returns the root `Program` node or a
//! single line-annotated [`ParseError`]. Comments appear in the tree,
//! interleaved at statement boundaries in source order.
//!
//! ```
//! use ctree::parse;
//!
//! let program = parse("int main() { return 0; }").unwrap();
//! assert_eq!(program.kind(), "Program");
//! ```

pub mod parser;

pub use parser::ast::Node;
pub use parser::config::Dialect;
pub use parser::parse::{ParseError, Parser};

/// Parse `source` with the default C dialect.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(source).parse()
}
