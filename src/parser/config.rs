//! Dialect configuration
//!
//! Everything the grammar consults that is data rather than code lives here:
//! the qualifier keywords, the built-in type names, the binary operator set
//! with its precedence table, and the escape letters recognized inside
//! character and string literals.
//!
//! The operator list is ordered **longest first**. The operator scanner tries
//! entries in list order and stops at the first match, so any operator that is
//! a prefix of another (`<` of `<<`, `=` of `==`) must come later in the list.
//! [`Dialect::check_operator_order`] verifies this for custom tables.

use rustc_hash::{FxHashMap, FxHashSet};

/// Parser configuration: keyword sets, operator table, escape letters.
///
/// `Default` yields the C dialect tables. `type_names` grows at parse time
/// when `typedef` registers a new name.
#[derive(Debug, Clone)]
pub struct Dialect {
    /// Qualifier keywords accepted before (or in place of) a type name.
    pub type_modifiers: Vec<String>,
    /// Known type names, built-ins first; `typedef` appends to this list.
    pub type_names: Vec<String>,
    /// Binary operator lexemes, longest first.
    pub operators: Vec<String>,
    /// Operator lexeme -> binding power; higher binds tighter.
    pub precedence: FxHashMap<String, i32>,
    /// Letters that form a valid two-character escape after a backslash.
    pub escapes: FxHashSet<u8>,
}

impl Default for Dialect {
    fn default() -> Self {
        let type_modifiers = [
            "const", "static", "extern", "unsigned", "signed", "long", "short", "volatile",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let type_names = ["void", "char", "int", "float", "double"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let operators: Vec<String> = [
            "<<=", ">>=", // three-character assignments
            "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=",
            "|=", "^=", // two-character
            "=", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^", // single-character
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let mut precedence = FxHashMap::default();
        for (ops, level) in [
            (vec!["*", "/", "%"], 13),
            (vec!["+", "-"], 12),
            (vec!["<<", ">>"], 11),
            (vec!["<", "<=", ">", ">="], 10),
            (vec!["==", "!="], 9),
            (vec!["&"], 8),
            (vec!["^"], 7),
            (vec!["|"], 6),
            (vec!["&&"], 5),
            (vec!["||"], 4),
            (
                vec![
                    "=", "+=", "-=", "*=", "/=", "%=", "<<=", ">>=", "&=", "|=", "^=",
                ],
                1,
            ),
        ] {
            for op in ops {
                precedence.insert(op.to_string(), level);
            }
        }

        let escapes: FxHashSet<u8> = [
            b'n', b't', b'r', b'0', b'\\', b'\'', b'"', b'a', b'b', b'f', b'v',
        ]
        .into_iter()
        .collect();

        Dialect {
            type_modifiers,
            type_names,
            operators,
            precedence,
            escapes,
        }
    }
}

impl Dialect {
    /// Binding power of `op`; unknown lexemes bind loosest.
    pub fn precedence_of(&self, op: &str) -> i32 {
        self.precedence.get(op).copied().unwrap_or(0)
    }

    /// Returns the first operator that shadows a longer one, i.e. appears in
    /// the list before another operator it is a prefix of. A correct table
    /// returns `None`.
    pub fn check_operator_order(&self) -> Option<(&str, &str)> {
        for (i, shorter) in self.operators.iter().enumerate() {
            for longer in self.operators.iter().skip(i + 1) {
                if longer.len() > shorter.len() && longer.starts_with(shorter.as_str()) {
                    return Some((shorter.as_str(), longer.as_str()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_operator_table_is_longest_first() {
        assert_eq!(Dialect::default().check_operator_order(), None);
    }

    #[test]
    fn every_operator_has_a_precedence() {
        let dialect = Dialect::default();
        for op in &dialect.operators {
            assert!(
                dialect.precedence.contains_key(op),
                "operator {:?} missing from precedence table",
                op
            );
        }
    }

    #[test]
    fn misordered_table_is_detected() {
        let mut dialect = Dialect::default();
        dialect.operators = vec!["=".to_string(), "==".to_string()];
        assert_eq!(dialect.check_operator_order(), Some(("=", "==")));
    }
}
